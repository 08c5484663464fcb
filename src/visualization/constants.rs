//! Colours and sizes for the graph scene.

use bevy::prelude::*;

// =============================================================================
// Scene Colors
// =============================================================================

/// Scene background (#0D0D0D).
pub const COLOR_BACKGROUND: Color = Color::srgb(0.051, 0.051, 0.051);
/// Node colour when neither hovered nor focused (#FFFFFF).
pub const COLOR_NODE_DEFAULT: Color = Color::WHITE;
/// Node colour when hovered or focused (#FF5722).
pub const COLOR_NODE_HIGHLIGHT: Color = Color::srgb(1.0, 0.341, 0.133);
/// Link colour.
pub const COLOR_LINK: Color = Color::srgba(0.6, 0.6, 0.6, 0.6);

// =============================================================================
// UI Colors
// =============================================================================

pub const COLOR_PANEL: Color = Color::srgba(0.1, 0.1, 0.15, 0.85);
pub const COLOR_PANEL_HOVER: Color = Color::srgba(0.18, 0.18, 0.25, 0.95);
pub const COLOR_TEXT: Color = Color::srgb(0.9, 0.9, 0.9);
pub const COLOR_PLACEHOLDER: Color = Color::srgb(0.5, 0.5, 0.55);
/// Search field border while it holds keyboard focus.
pub const COLOR_FOCUS_BORDER: Color = COLOR_NODE_HIGHLIGHT;
pub const COLOR_IDLE_BORDER: Color = Color::srgb(0.3, 0.3, 0.35);

// =============================================================================
// Sizing
// =============================================================================

/// Rendered node sphere radius in world units.
pub const NODE_RADIUS: f32 = 4.0;
/// Pointer hit radius as a multiple of the visual radius.
pub const PICK_RADIUS_SCALE: f32 = 1.5;
/// Link cylinder radius.
pub const LINK_RADIUS: f32 = 0.4;
/// Camera far plane. Must exceed the orbit diameter.
pub const CAMERA_FAR: f32 = 10_000.0;

/// Placeholder shown in the empty search field.
pub const SEARCH_PLACEHOLDER: &str = "Search node by id or name";
