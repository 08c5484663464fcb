//! ECS resources for visualization state.
//!
//! The camera director and input dispatcher live here so every system sees
//! the same single owner of camera state.

use bevy::prelude::*;

use crate::camera::CameraDirector;
use crate::interaction::InputDispatcher;
use crate::models::GraphData;

// =============================================================================
// Camera & Input State
// =============================================================================

/// The camera director driving the viewport camera.
#[derive(Resource)]
pub struct DirectorRes(pub CameraDirector);

/// Keyboard focus and search query.
#[derive(Resource)]
pub struct InputRes(pub InputDispatcher);

// =============================================================================
// Graph Data
// =============================================================================

/// The graph being displayed.
#[derive(Resource)]
pub struct GraphRes(pub GraphData);

// =============================================================================
// Materials
// =============================================================================

/// Node materials, swapped when the highlight set changes.
#[derive(Resource)]
pub struct NodeMaterials {
    pub normal: Handle<StandardMaterial>,
    pub highlight: Handle<StandardMaterial>,
}

impl NodeMaterials {
    pub fn for_highlight(&self, highlighted: bool) -> &Handle<StandardMaterial> {
        if highlighted {
            &self.highlight
        } else {
            &self.normal
        }
    }
}
