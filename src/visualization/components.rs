//! ECS components for the graph scene and its controls.

use bevy::prelude::*;

/// Sphere mesh representing a graph node.
#[derive(Component)]
pub struct NodeMesh {
    /// Node identifier in the loaded graph.
    pub id: String,
    /// Visual radius, used for pointer picking.
    pub radius: f32,
}

/// Cylinder mesh representing a link between two nodes.
#[derive(Component)]
pub struct LinkMesh;

/// The pause/resume button.
#[derive(Component)]
pub struct ToggleButton;

/// Text inside the pause/resume button.
#[derive(Component)]
pub struct ToggleLabel;

/// The clickable search box.
#[derive(Component)]
pub struct SearchField;

/// Text inside the search box.
#[derive(Component)]
pub struct SearchText;

/// Floating label naming the hovered node.
#[derive(Component)]
pub struct HoverLabel;
