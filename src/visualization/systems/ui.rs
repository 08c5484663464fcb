//! UI systems: control labels, search field text, node highlight and hover label.

use bevy::prelude::*;
use bevy::ui::Node as UiNode;

use crate::interaction::InputFocus;
use crate::visualization::components::{
    HoverLabel, NodeMesh, SearchField, SearchText, ToggleButton, ToggleLabel,
};
use crate::visualization::constants::{
    COLOR_FOCUS_BORDER, COLOR_IDLE_BORDER, COLOR_PANEL, COLOR_PANEL_HOVER, COLOR_PLACEHOLDER,
    COLOR_TEXT, NODE_RADIUS, SEARCH_PLACEHOLDER,
};
use crate::visualization::resources::{DirectorRes, GraphRes, InputRes, NodeMaterials};

/// Keep the toggle button text in step with the camera state.
pub fn update_toggle_label_system(
    director: Res<DirectorRes>,
    mut label_query: Query<&mut Text, With<ToggleLabel>>,
) {
    let label = director.0.toggle_label();
    for mut text in label_query.iter_mut() {
        if text.as_str() != label {
            **text = label.to_string();
        }
    }
}

/// Lighten controls under the pointer.
pub fn update_button_hover_system(
    mut button_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, Or<(With<ToggleButton>, With<SearchField>)>),
    >,
) {
    for (interaction, mut background) in button_query.iter_mut() {
        background.0 = match interaction {
            Interaction::None => COLOR_PANEL,
            Interaction::Hovered | Interaction::Pressed => COLOR_PANEL_HOVER,
        };
    }
}

/// Render the search query, placeholder and focus border.
pub fn update_search_field_system(
    input: Res<InputRes>,
    mut text_query: Query<(&mut Text, &mut TextColor), With<SearchText>>,
    mut border_query: Query<&mut BorderColor, With<SearchField>>,
) {
    if !input.is_changed() {
        return;
    }

    let focused = input.0.focus() == InputFocus::SearchField;
    let query = input.0.query();

    for (mut text, mut color) in text_query.iter_mut() {
        if query.is_empty() && !focused {
            **text = SEARCH_PLACEHOLDER.to_string();
            color.0 = COLOR_PLACEHOLDER;
        } else {
            **text = if focused {
                format!("{}|", query)
            } else {
                query.to_string()
            };
            color.0 = COLOR_TEXT;
        }
    }

    for mut border in border_query.iter_mut() {
        border.0 = if focused {
            COLOR_FOCUS_BORDER
        } else {
            COLOR_IDLE_BORDER
        };
    }
}

/// Swap node materials so hovered and focused nodes stand out.
pub fn update_node_highlight_system(
    director: Res<DirectorRes>,
    materials: Option<Res<NodeMaterials>>,
    mut node_query: Query<(&NodeMesh, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    let Some(materials) = materials else {
        return;
    };

    for (node, mut material) in node_query.iter_mut() {
        let wanted = materials.for_highlight(director.0.is_highlighted(&node.id));
        if material.0 != *wanted {
            material.0 = wanted.clone();
        }
    }
}

/// Float the hovered node's label just above it in screen space.
pub fn update_hover_label_system(
    director: Res<DirectorRes>,
    graph: Res<GraphRes>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut label_query: Query<(&mut Text, &mut UiNode, &mut Visibility), With<HoverLabel>>,
) {
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };
    let Ok((mut text, mut node_ui, mut visibility)) = label_query.get_single_mut() else {
        return;
    };

    let Some(node) = director.0.hover_target().and_then(|id| graph.0.get(id)) else {
        *visibility = Visibility::Hidden;
        return;
    };

    let world_pos = node.position() + Vec3::Y * (NODE_RADIUS * 1.5);
    let in_front = (world_pos - camera_transform.translation()).dot(*camera_transform.forward()) > 0.0;

    match camera.world_to_viewport(camera_transform, world_pos) {
        Ok(viewport_pos) if in_front => {
            if text.as_str() != node.label() {
                **text = node.label().to_string();
            }
            node_ui.left = Val::Px(viewport_pos.x - 30.0);
            node_ui.top = Val::Px(viewport_pos.y - 24.0);
            *visibility = Visibility::Visible;
        }
        _ => *visibility = Visibility::Hidden,
    }
}
