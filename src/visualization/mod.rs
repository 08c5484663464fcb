//! 3D Graph Visualization Module
//!
//! Renders a [`GraphData`] with Bevy under a camera owned by the
//! [`CameraDirector`](crate::camera::CameraDirector). This module is only the
//! adapter: it feeds pointer and keyboard input to the dispatcher and copies
//! the director's pose onto the camera every frame.
//!
//! ## Module Structure
//!
//! - `components` - ECS components for nodes, links and controls
//! - `resources` - ECS resources wrapping the director, dispatcher and graph
//! - `systems` - ECS systems (camera, input, UI)
//! - `setup` - Scene initialization
//! - `plugin` - Bevy plugin definition
//! - `constants` - Colors, sizes, and other constants

mod components;
mod constants;
mod plugin;
mod resources;
mod setup;
mod systems;

pub use plugin::VisualizationPlugin;
pub use systems::interaction::nearest_node;

use crate::config::Config;
use crate::models::GraphData;
use bevy::prelude::*;
use constants::COLOR_BACKGROUND;

/// Run the visualizer.
///
/// This spawns a Bevy window with the 3D graph visualization.
/// The function blocks until the window is closed.
pub fn run_visualizer(graph: GraphData, config: Config) {
    let window = Window {
        title: config.window.title.clone(),
        resolution: (config.window.width, config.window.height).into(),
        ..default()
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .insert_resource(ClearColor(COLOR_BACKGROUND))
        .add_plugins(VisualizationPlugin::new(graph, config))
        .run();
}
