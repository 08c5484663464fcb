//! Time-bounded camera moves.
//!
//! The controller only knows *how* to move the camera, never *when*. Callers
//! start a move and then tick it with the frame clock; the tick that reaches
//! the end of the duration reports completion.

use super::{ease_in_out, CameraPose};

/// A single animated move between two poses.
#[derive(Clone, Debug)]
pub struct CameraTransition {
    /// Pose displayed when the move started.
    from: CameraPose,
    /// Destination pose.
    to: CameraPose,
    /// Start time (ms timestamp).
    start_ms: f64,
    /// Length of the move in milliseconds.
    duration_ms: f64,
}

impl CameraTransition {
    /// Create a new transition.
    pub fn new(from: CameraPose, to: CameraPose, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(0.0),
        }
    }

    /// Get the progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = now_ms - self.start_ms;
        (elapsed / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Check if the move has reached its destination.
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Pose at `now_ms`.
    pub fn current(&self, now_ms: f64) -> CameraPose {
        if self.is_complete(now_ms) {
            return self.to;
        }
        let t = ease_in_out(self.progress(now_ms));
        CameraPose::lerp(&self.from, &self.to, t)
    }

    /// Starting pose.
    pub fn start_pose(&self) -> CameraPose {
        self.from
    }

    /// Destination pose.
    pub fn final_pose(&self) -> CameraPose {
        self.to
    }
}

/// Outcome of ticking the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionStep {
    /// No move in flight.
    Idle,
    /// Move in flight; apply this pose.
    Moving(CameraPose),
    /// Move finished on this tick; apply this (final) pose.
    Completed(CameraPose),
}

/// Owner of the in-flight camera move, if any.
#[derive(Clone, Debug, Default)]
pub struct TransitionController {
    active: Option<CameraTransition>,
}

impl TransitionController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Check if a move is in flight.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The in-flight move, if any.
    #[cfg(test)]
    pub(crate) fn active(&self) -> Option<&CameraTransition> {
        self.active.as_ref()
    }

    /// Start moving from `from` to `to` over `duration_ms`.
    ///
    /// Replaces any move already in flight. A zero duration jumps: the
    /// destination is returned immediately and nothing is left in flight.
    pub fn start(
        &mut self,
        from: CameraPose,
        to: CameraPose,
        now_ms: f64,
        duration_ms: f64,
    ) -> Option<CameraPose> {
        if duration_ms <= 0.0 {
            self.active = None;
            return Some(to);
        }
        self.active = Some(CameraTransition::new(from, to, now_ms, duration_ms));
        None
    }

    /// Advance the in-flight move to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> TransitionStep {
        let transition = match &self.active {
            Some(t) => t,
            None => return TransitionStep::Idle,
        };

        if transition.is_complete(now_ms) {
            let pose = transition.final_pose();
            self.active = None;
            TransitionStep::Completed(pose)
        } else {
            TransitionStep::Moving(transition.current(now_ms))
        }
    }

    /// Drop the in-flight move without applying it.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
