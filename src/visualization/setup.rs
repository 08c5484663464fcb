//! Scene setup: camera, lights, graph meshes and the control overlay.

use bevy::prelude::*;
use bevy::ui::PositionType;

use crate::camera::PAUSE_LABEL;
use crate::visualization::components::{
    HoverLabel, LinkMesh, NodeMesh, SearchField, SearchText, ToggleButton, ToggleLabel,
};
use crate::visualization::constants::{
    CAMERA_FAR, COLOR_IDLE_BORDER, COLOR_LINK, COLOR_NODE_DEFAULT, COLOR_NODE_HIGHLIGHT,
    COLOR_PANEL, COLOR_PLACEHOLDER, COLOR_TEXT, LINK_RADIUS, NODE_RADIUS, SEARCH_PLACEHOLDER,
};
use crate::visualization::resources::{DirectorRes, GraphRes, NodeMaterials};

/// Setup the scene with camera, lighting, graph meshes and UI.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    graph: Res<GraphRes>,
    director: Res<DirectorRes>,
) {
    // Camera starts wherever the director says it is
    let pose = director.0.pose();
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(pose.position).looking_at(pose.target, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 12000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(400.0, 800.0, 400.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 600.0,
    });

    let node_materials = NodeMaterials {
        normal: materials.add(StandardMaterial {
            base_color: COLOR_NODE_DEFAULT,
            perceptual_roughness: 0.6,
            ..default()
        }),
        highlight: materials.add(StandardMaterial {
            base_color: COLOR_NODE_HIGHLIGHT,
            emissive: LinearRgba::new(0.6, 0.2, 0.05, 1.0),
            perceptual_roughness: 0.4,
            ..default()
        }),
    };

    let node_mesh = meshes.add(Sphere::new(NODE_RADIUS));
    for node in &graph.0.nodes {
        commands.spawn((
            Mesh3d(node_mesh.clone()),
            MeshMaterial3d(node_materials.normal.clone()),
            Transform::from_translation(node.position()),
            NodeMesh {
                id: node.id.clone(),
                radius: NODE_RADIUS,
            },
        ));
    }

    // Links as unit cylinders stretched between their endpoints
    let link_mesh = meshes.add(Cylinder::new(LINK_RADIUS, 1.0));
    let link_material = materials.add(StandardMaterial {
        base_color: COLOR_LINK,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    for link in &graph.0.links {
        let (Some(from), Some(to)) = (graph.0.get(&link.source), graph.0.get(&link.target)) else {
            continue;
        };
        let from_pos = from.position();
        let to_pos = to.position();
        let direction = to_pos - from_pos;
        let length = direction.length();
        if length < 0.01 {
            continue;
        }

        let rotation = Quat::from_rotation_arc(Vec3::Y, direction / length);
        commands.spawn((
            Mesh3d(link_mesh.clone()),
            MeshMaterial3d(link_material.clone()),
            Transform::from_translation((from_pos + to_pos) / 2.0)
                .with_rotation(rotation)
                .with_scale(Vec3::new(1.0, length, 1.0)),
            LinkMesh,
        ));
    }

    commands.insert_resource(node_materials);

    spawn_controls(&mut commands);
}

/// Toggle button (top left), search field (bottom centre) and hover label.
fn spawn_controls(commands: &mut Commands) {
    commands
        .spawn((
            Button,
            bevy::ui::Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(COLOR_PANEL),
            BorderRadius::all(Val::Px(6.0)),
            ToggleButton,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(PAUSE_LABEL),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(COLOR_TEXT),
                ToggleLabel,
            ));
        });

    commands
        .spawn(bevy::ui::Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(20.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|parent| {
            parent
                .spawn((
                    Button,
                    bevy::ui::Node {
                        width: Val::Px(340.0),
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BackgroundColor(COLOR_PANEL),
                    BorderColor(COLOR_IDLE_BORDER),
                    BorderRadius::all(Val::Px(6.0)),
                    SearchField,
                ))
                .with_children(|field| {
                    field.spawn((
                        Text::new(SEARCH_PLACEHOLDER),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(COLOR_PLACEHOLDER),
                        SearchText,
                    ));
                });
        });

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        TextColor(COLOR_TEXT),
        bevy::ui::Node {
            position_type: PositionType::Absolute,
            ..default()
        },
        Visibility::Hidden,
        HoverLabel,
    ));
}
