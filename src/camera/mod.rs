//! Camera control core.
//!
//! Engine-agnostic camera logic for the graph viewer. Nothing in here knows
//! about Bevy entities; the renderer adapter feeds in a clock and applies the
//! poses handed back.
//!
//! ## Module Structure
//!
//! - `pose` - Camera position/target pair
//! - `orbit` - Autonomous circular orbit around the scene origin
//! - `easing` - Easing curves for animated moves
//! - `transition` - Time-bounded pose animation with redirect
//! - `director` - Focus state machine arbitrating orbit and focus

mod director;
mod easing;
mod orbit;
mod pose;
mod transition;

pub use director::{
    CameraDirector, DirectorSettings, FocusState, FocusTarget, PAUSE_LABEL, RESUME_LABEL,
};
pub use easing::ease_in_out;
pub use orbit::OrbitState;
pub use pose::{focus_pose, CameraPose};
pub use transition::{CameraTransition, TransitionController, TransitionStep};
