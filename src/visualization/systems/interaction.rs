//! Input systems: pointer picking, keyboard, and the overlay controls.
//!
//! Each system turns bevy input into [`InputEvent`]s, runs them through the
//! dispatcher, and applies whatever command comes out to the director.

use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::interaction::{InputEvent, KeyInput};
use crate::visualization::components::{NodeMesh, SearchField, ToggleButton};
use crate::visualization::constants::PICK_RADIUS_SCALE;
use crate::visualization::resources::{DirectorRes, GraphRes, InputRes};
use crate::visualization::systems::camera::now_ms;

/// Closest node whose hit sphere the ray passes through.
///
/// `nodes` yields `(id, centre, radius)`; hit spheres are
/// [`PICK_RADIUS_SCALE`] times the visual radius.
pub fn nearest_node<'a>(
    origin: Vec3,
    direction: Vec3,
    nodes: impl IntoIterator<Item = (&'a str, Vec3, f32)>,
) -> Option<&'a str> {
    let mut closest: Option<(&'a str, f32)> = None;

    for (id, centre, radius) in nodes {
        let t = (centre - origin).dot(direction);
        if t <= 0.0 {
            continue;
        }
        let distance = (origin + direction * t - centre).length();
        if distance < radius * PICK_RADIUS_SCALE && closest.map_or(true, |(_, best)| t < best) {
            closest = Some((id, t));
        }
    }

    closest.map(|(id, _)| id)
}

fn dispatch(
    event: InputEvent,
    input: &mut InputRes,
    director: &mut DirectorRes,
    graph: &GraphRes,
    now_ms: f64,
) {
    if let Some(command) = input.0.handle(event, &graph.0) {
        command.apply(&mut director.0, &graph.0, now_ms);
    }
}

/// Hover tracking and click-to-focus in the viewport.
///
/// Ignored while the pointer is over a UI control so clicking the toggle
/// button does not also pick whatever node sits behind it.
#[allow(clippy::too_many_arguments)]
pub fn pointer_input_system(
    time: Res<Time>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    node_query: Query<(&Transform, &NodeMesh)>,
    ui_query: Query<&Interaction, With<Button>>,
    graph: Res<GraphRes>,
    mut input: ResMut<InputRes>,
    mut director: ResMut<DirectorRes>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };
    if ui_query.iter().any(|interaction| *interaction != Interaction::None) {
        return;
    }

    let picked = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world(camera_transform, cursor).ok())
        .and_then(|ray| {
            nearest_node(
                ray.origin,
                *ray.direction,
                node_query
                    .iter()
                    .map(|(transform, node)| (node.id.as_str(), transform.translation, node.radius)),
            )
        })
        .map(str::to_string);

    let now = now_ms(&time);
    if picked.as_deref() != director.0.hover_target() {
        dispatch(
            InputEvent::Hover(picked.clone()),
            &mut input,
            &mut director,
            &graph,
            now,
        );
    }

    if mouse_button.just_pressed(MouseButton::Left) {
        dispatch(
            InputEvent::Click(picked),
            &mut input,
            &mut director,
            &graph,
            now,
        );
    }
}

/// Route key presses to the dispatcher, which decides between hotkeys and
/// search editing based on focus.
pub fn keyboard_input_system(
    time: Res<Time>,
    mut keys: EventReader<KeyboardInput>,
    graph: Res<GraphRes>,
    mut input: ResMut<InputRes>,
    mut director: ResMut<DirectorRes>,
) {
    let now = now_ms(&time);

    for event in keys.read() {
        if !event.state.is_pressed() {
            continue;
        }

        let decoded: Vec<KeyInput> = match &event.logical_key {
            Key::Character(text) => text.chars().map(KeyInput::Char).collect(),
            Key::Space => vec![KeyInput::Char(' ')],
            Key::Backspace => vec![KeyInput::Backspace],
            Key::Enter => vec![KeyInput::Enter],
            Key::Escape => vec![KeyInput::Escape],
            _ => continue,
        };

        for key in decoded {
            dispatch(
                InputEvent::Key(key),
                &mut input,
                &mut director,
                &graph,
                now,
            );
        }
    }
}

/// Presses on the toggle button and the search field.
pub fn control_button_system(
    time: Res<Time>,
    toggle_query: Query<&Interaction, (Changed<Interaction>, With<ToggleButton>)>,
    search_query: Query<&Interaction, (Changed<Interaction>, With<SearchField>)>,
    graph: Res<GraphRes>,
    mut input: ResMut<InputRes>,
    mut director: ResMut<DirectorRes>,
) {
    let now = now_ms(&time);

    for interaction in toggle_query.iter() {
        if *interaction == Interaction::Pressed {
            dispatch(
                InputEvent::ToggleButton,
                &mut input,
                &mut director,
                &graph,
                now,
            );
        }
    }

    for interaction in search_query.iter() {
        if *interaction == Interaction::Pressed {
            dispatch(
                InputEvent::SearchFieldClicked,
                &mut input,
                &mut director,
                &graph,
                now,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_node_picks_closest_hit() {
        let nodes = [
            ("far", Vec3::new(0.0, 0.0, -100.0), 4.0),
            ("near", Vec3::new(0.0, 0.0, -50.0), 4.0),
            ("off-axis", Vec3::new(40.0, 0.0, -20.0), 4.0),
        ];
        let picked = nearest_node(Vec3::ZERO, Vec3::NEG_Z, nodes);
        assert_eq!(picked, Some("near"));
    }

    #[test]
    fn test_nearest_node_ignores_nodes_behind_ray() {
        let nodes = [("behind", Vec3::new(0.0, 0.0, 30.0), 4.0)];
        assert_eq!(nearest_node(Vec3::ZERO, Vec3::NEG_Z, nodes), None);
    }

    #[test]
    fn test_nearest_node_uses_enlarged_hit_radius() {
        // 5 units off axis: outside the 4 unit sphere, inside the 6 unit hit sphere
        let nodes = [("edge", Vec3::new(5.0, 0.0, -50.0), 4.0)];
        assert_eq!(nearest_node(Vec3::ZERO, Vec3::NEG_Z, nodes), Some("edge"));
    }
}
