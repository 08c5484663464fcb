//! Focus state machine.
//!
//! Arbitrates between the autonomous orbit and user-driven focus requests.
//! A single [`FocusState`] value replaces the loose "orbiting" /
//! "transitioning" / "clicked" flags a viewer would otherwise juggle, so the
//! orbit can only ever write the camera while the state is exactly
//! [`FocusState::Orbiting`].

use bevy::math::Vec3;

use super::{focus_pose, CameraPose, OrbitState, TransitionController, TransitionStep};

/// Label shown on the toggle control while orbiting.
pub const PAUSE_LABEL: &str = "Pause Orbit";
/// Label shown on the toggle control while paused or focused.
pub const RESUME_LABEL: &str = "Resume Orbit";

/// Camera control state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusState {
    /// Orbit driver owns the camera.
    #[default]
    Orbiting,
    /// Orbit suspended with nothing selected.
    PausedIdle,
    /// Animating toward a selected node.
    Focusing,
    /// Camera at rest in front of the selected node.
    Parked,
    /// Animating back to the saved orbit pose.
    Returning,
}

impl FocusState {
    /// Check if a camera move is in flight.
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        matches!(self, FocusState::Focusing | FocusState::Returning)
    }
}

/// The node the camera is focused on.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusTarget {
    /// Node identifier.
    pub id: String,
    /// Node position at selection time.
    pub position: Vec3,
}

/// Tunables for focus moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectorSettings {
    /// Extra distance beyond the node at which the camera parks.
    pub standoff: f32,
    /// Duration of focus and return moves in milliseconds.
    pub transition_ms: f64,
}

impl Default for DirectorSettings {
    fn default() -> Self {
        Self {
            standoff: 40.0,
            transition_ms: 3000.0,
        }
    }
}

/// Camera director: the single owner of camera state.
#[derive(Clone, Debug)]
pub struct CameraDirector {
    state: FocusState,
    orbit: OrbitState,
    transitions: TransitionController,
    settings: DirectorSettings,
    /// Pose currently displayed.
    pose: CameraPose,
    /// Pose captured just before leaving the orbit for a focus.
    saved_pose: Option<CameraPose>,
    focus: Option<FocusTarget>,
    hover: Option<String>,
}

impl Default for CameraDirector {
    fn default() -> Self {
        Self::new(OrbitState::default(), DirectorSettings::default())
    }
}

impl CameraDirector {
    /// Create a director orbiting from the orbit's starting position,
    /// looking at the scene origin.
    pub fn new(orbit: OrbitState, settings: DirectorSettings) -> Self {
        Self {
            state: FocusState::Orbiting,
            pose: CameraPose::looking_at_origin(orbit.position()),
            orbit,
            transitions: TransitionController::new(),
            settings,
            saved_pose: None,
            focus: None,
            hover: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn orbit(&self) -> &OrbitState {
        &self.orbit
    }

    pub fn saved_pose(&self) -> Option<CameraPose> {
        self.saved_pose
    }

    pub fn focus_target(&self) -> Option<&FocusTarget> {
        self.focus.as_ref()
    }

    pub fn hover_target(&self) -> Option<&str> {
        self.hover.as_deref()
    }

    /// Whether a node should be drawn in the highlight colour.
    pub fn is_highlighted(&self, node_id: &str) -> bool {
        self.hover.as_deref() == Some(node_id)
            || self.focus.as_ref().is_some_and(|f| f.id == node_id)
    }

    /// Text for the pause/resume control.
    pub fn toggle_label(&self) -> &'static str {
        match self.state {
            FocusState::Orbiting => PAUSE_LABEL,
            _ => RESUME_LABEL,
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Focus the camera on a node.
    ///
    /// Only the first selection after leaving the orbit captures the saved
    /// pose; retargeting keeps the original so resuming always lands back
    /// on the orbit.
    pub fn select(&mut self, id: &str, position: Vec3, now_ms: f64) {
        if matches!(self.state, FocusState::Orbiting | FocusState::PausedIdle) {
            self.saved_pose = Some(self.pose);
        }

        tracing::debug!("Focusing node {} at {:?}", id, position);
        self.focus = Some(FocusTarget {
            id: id.to_string(),
            position,
        });

        let target = focus_pose(position, self.settings.standoff);
        self.set_state(FocusState::Focusing);
        self.begin_transition(target, now_ms);
    }

    /// Suspend the orbit. Only meaningful while orbiting.
    pub fn pause(&mut self) {
        if self.state != FocusState::Orbiting {
            return;
        }
        self.focus = None;
        self.saved_pose = None;
        self.set_state(FocusState::PausedIdle);
    }

    /// Return to orbiting, animating back to the saved pose if there is one.
    pub fn resume(&mut self, now_ms: f64) {
        match self.state {
            FocusState::PausedIdle => self.set_state(FocusState::Orbiting),
            FocusState::Focusing | FocusState::Parked => {
                self.focus = None;
                match self.saved_pose {
                    Some(home) => {
                        self.set_state(FocusState::Returning);
                        self.begin_transition(home, now_ms);
                    }
                    None => {
                        self.transitions.cancel();
                        self.set_state(FocusState::Orbiting);
                    }
                }
            }
            FocusState::Orbiting | FocusState::Returning => {}
        }
    }

    /// Pause when orbiting, resume when paused or focused.
    ///
    /// Ignored while already returning, so a repeated press cannot restart
    /// the return move.
    pub fn toggle(&mut self, now_ms: f64) {
        match self.state {
            FocusState::Orbiting => self.pause(),
            FocusState::PausedIdle | FocusState::Focusing | FocusState::Parked => {
                self.resume(now_ms)
            }
            FocusState::Returning => {
                tracing::debug!("Toggle ignored while returning to orbit");
            }
        }
    }

    /// Record the node under the pointer. No camera effect.
    pub fn set_hover(&mut self, id: Option<String>) {
        self.hover = id;
    }

    /// Advance one animation frame.
    ///
    /// Returns the new pose when the camera moved on this frame.
    pub fn tick(&mut self, now_ms: f64) -> Option<CameraPose> {
        match self.state {
            FocusState::Orbiting => {
                self.pose.position = self.orbit.advance();
                Some(self.pose)
            }
            FocusState::Focusing | FocusState::Returning => match self.transitions.tick(now_ms) {
                TransitionStep::Idle => None,
                TransitionStep::Moving(pose) => {
                    self.pose = pose;
                    Some(pose)
                }
                TransitionStep::Completed(pose) => {
                    self.pose = pose;
                    self.finish_transition();
                    Some(pose)
                }
            },
            FocusState::PausedIdle | FocusState::Parked => None,
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn begin_transition(&mut self, to: CameraPose, now_ms: f64) {
        let jumped = self
            .transitions
            .start(self.pose, to, now_ms, self.settings.transition_ms);
        if let Some(pose) = jumped {
            self.pose = pose;
            self.finish_transition();
        }
    }

    fn finish_transition(&mut self) {
        match self.state {
            FocusState::Focusing => self.set_state(FocusState::Parked),
            FocusState::Returning => {
                self.saved_pose = None;
                self.set_state(FocusState::Orbiting);
            }
            _ => {}
        }
    }

    fn set_state(&mut self, next: FocusState) {
        if self.state != next {
            tracing::debug!("Camera state {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: f64 = 3000.0;

    fn director() -> CameraDirector {
        CameraDirector::default()
    }

    /// Tick the director from `start` to `end` at 60 fps.
    fn run_frames(director: &mut CameraDirector, start: f64, end: f64) -> f64 {
        let mut now = start;
        while now < end {
            now += 16.0;
            director.tick(now);
        }
        now
    }

    #[test]
    fn test_initial_state() {
        let d = director();
        assert_eq!(d.state(), FocusState::Orbiting);
        assert_eq!(d.pose().target, Vec3::ZERO);
        assert!((d.pose().position - Vec3::new(0.0, 0.0, 1300.0)).length() < 1e-3);
        assert_eq!(d.toggle_label(), PAUSE_LABEL);
    }

    #[test]
    fn test_orbit_tick_moves_camera_on_circle() {
        let mut d = director();
        for i in 0..100 {
            let pose = d.tick(i as f64 * 16.0).expect("orbit moves camera");
            assert!((pose.position.y - 0.0).abs() < 1e-4);
            let r = (pose.position.x.powi(2) + pose.position.z.powi(2)).sqrt();
            assert!((r - 1300.0).abs() < 1e-2);
            assert_eq!(pose.target, Vec3::ZERO);
        }
    }

    #[test]
    fn test_click_focuses_and_parks() {
        let mut d = director();
        d.tick(16.0);
        let before = d.pose();

        d.select("A", Vec3::new(10.0, 0.0, 0.0), 100.0);
        assert_eq!(d.state(), FocusState::Focusing);
        assert_eq!(d.saved_pose(), Some(before));
        assert_eq!(d.focus_target().map(|f| f.id.as_str()), Some("A"));
        assert_eq!(d.toggle_label(), RESUME_LABEL);

        run_frames(&mut d, 100.0, 100.0 + DURATION);
        assert_eq!(d.state(), FocusState::Parked);
        assert!((d.pose().position - Vec3::new(50.0, 0.0, 0.0)).length() < 1e-3);
        assert_eq!(d.pose().target, Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_orbit_frozen_during_focus_cycle() {
        let mut d = director();
        d.tick(16.0);
        let angle = d.orbit().angle();

        d.select("A", Vec3::new(10.0, 0.0, 0.0), 16.0);
        let mut now = 16.0;
        while d.state() != FocusState::Parked {
            now += 16.0;
            d.tick(now);
            assert_eq!(d.orbit().angle(), angle);
        }
        // Parked frames leave the camera alone
        let parked = d.pose();
        for _ in 0..10 {
            now += 16.0;
            assert_eq!(d.tick(now), None);
        }
        assert_eq!(d.pose(), parked);

        d.resume(now);
        while d.state() == FocusState::Returning {
            now += 16.0;
            d.tick(now);
            assert_eq!(d.orbit().angle(), angle);
        }
        assert_eq!(d.state(), FocusState::Orbiting);
    }

    #[test]
    fn test_resume_returns_to_saved_pose() {
        let mut d = director();
        let mut now = run_frames(&mut d, 0.0, 500.0);
        let before = d.pose();

        d.select("A", Vec3::new(-200.0, 80.0, 35.0), now);
        now = run_frames(&mut d, now, now + DURATION + 100.0);
        assert_eq!(d.state(), FocusState::Parked);

        d.resume(now);
        assert_eq!(d.state(), FocusState::Returning);
        assert!(d.focus_target().is_none());

        now = run_frames(&mut d, now, now + DURATION);
        assert_eq!(d.state(), FocusState::Orbiting);
        assert!(d.pose().approx_eq(&before, 1e-3));
        assert!(d.saved_pose().is_none());
        assert!(d.focus_target().is_none());

        // Orbit picks up where it left off, without a jump
        let next = d.tick(now + 16.0).unwrap();
        assert!(next.position.distance(before.position) < 1.0);
    }

    #[test]
    fn test_retarget_keeps_original_saved_pose() {
        let mut d = director();
        let mut now = run_frames(&mut d, 0.0, 200.0);
        let orbit_pose = d.pose();

        d.select("A", Vec3::new(10.0, 0.0, 0.0), now);
        now = run_frames(&mut d, now, now + DURATION);
        assert_eq!(d.state(), FocusState::Parked);

        d.select("B", Vec3::new(0.0, 0.0, 20.0), now);
        assert_eq!(d.state(), FocusState::Focusing);
        assert_eq!(d.focus_target().map(|f| f.id.as_str()), Some("B"));
        assert_eq!(d.saved_pose(), Some(orbit_pose));

        run_frames(&mut d, now, now + DURATION);
        assert!((d.pose().position - Vec3::new(0.0, 0.0, 60.0)).length() < 1e-3);
        assert_eq!(d.pose().target, Vec3::new(0.0, 0.0, 20.0));
    }

    #[test]
    fn test_retarget_mid_flight_redirects() {
        let mut d = director();
        d.select("A", Vec3::new(10.0, 0.0, 0.0), 0.0);
        d.tick(1500.0);
        let shown = d.pose();

        d.select("B", Vec3::new(0.0, 30.0, 0.0), 1500.0);
        // No jump at the redirect instant
        let first = d.tick(1500.0).unwrap();
        assert!(first.approx_eq(&shown, 1e-3));

        // The first move's deadline does not park the camera
        d.tick(3000.0);
        assert_eq!(d.state(), FocusState::Focusing);
        d.tick(4500.0);
        assert_eq!(d.state(), FocusState::Parked);
        assert_eq!(d.pose().target, Vec3::new(0.0, 30.0, 0.0));
    }

    #[test]
    fn test_select_while_returning_reuses_saved_pose() {
        let mut d = director();
        d.tick(16.0);
        let orbit_pose = d.pose();

        d.select("A", Vec3::new(10.0, 0.0, 0.0), 16.0);
        d.tick(3100.0);
        d.resume(3100.0);
        d.tick(4000.0);
        assert_eq!(d.state(), FocusState::Returning);

        d.select("B", Vec3::new(0.0, 0.0, 20.0), 4000.0);
        assert_eq!(d.state(), FocusState::Focusing);
        assert_eq!(d.saved_pose(), Some(orbit_pose));
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut d = director();
        d.tick(16.0);
        let pose = d.pose();

        d.pause();
        assert_eq!(d.state(), FocusState::PausedIdle);
        assert!(d.saved_pose().is_none());
        assert!(d.focus_target().is_none());

        d.pause();
        assert_eq!(d.state(), FocusState::PausedIdle);
        assert!(d.saved_pose().is_none());
        assert_eq!(d.pose(), pose);
        assert_eq!(d.tick(32.0), None);
    }

    #[test]
    fn test_toggle_round_trip_from_idle() {
        let mut d = director();
        d.toggle(0.0);
        assert_eq!(d.state(), FocusState::PausedIdle);
        assert_eq!(d.toggle_label(), RESUME_LABEL);

        d.toggle(10.0);
        assert_eq!(d.state(), FocusState::Orbiting);
        assert!(d.tick(26.0).is_some());
    }

    #[test]
    fn test_select_from_paused_idle_captures_pose() {
        let mut d = director();
        d.tick(16.0);
        d.pause();
        let paused = d.pose();

        d.select("A", Vec3::new(10.0, 0.0, 0.0), 100.0);
        assert_eq!(d.saved_pose(), Some(paused));
        assert_eq!(d.state(), FocusState::Focusing);
    }

    #[test]
    fn test_toggle_ignored_while_returning() {
        let mut d = director();
        d.select("A", Vec3::new(10.0, 0.0, 0.0), 0.0);
        d.tick(3000.0);
        d.toggle(3000.0);
        assert_eq!(d.state(), FocusState::Returning);

        d.tick(4000.0);
        let target = d.transitions.active().map(|t| t.final_pose());
        d.toggle(4000.0);
        assert_eq!(d.state(), FocusState::Returning);
        assert_eq!(d.transitions.active().map(|t| t.final_pose()), target);
    }

    #[test]
    fn test_resume_without_saved_pose_orbits_immediately() {
        let mut d = director();
        d.state = FocusState::Parked;
        d.resume(0.0);
        assert_eq!(d.state(), FocusState::Orbiting);
        assert!(!d.transitions.is_active());
    }

    #[test]
    fn test_zero_duration_parks_immediately() {
        let mut d = CameraDirector::new(
            OrbitState::default(),
            DirectorSettings {
                standoff: 40.0,
                transition_ms: 0.0,
            },
        );
        let before = d.pose();

        d.select("A", Vec3::new(10.0, 0.0, 0.0), 0.0);
        assert_eq!(d.state(), FocusState::Parked);
        assert!((d.pose().position - Vec3::new(50.0, 0.0, 0.0)).length() < 1e-3);

        d.resume(0.0);
        assert_eq!(d.state(), FocusState::Orbiting);
        assert_eq!(d.pose(), before);
        assert!(d.saved_pose().is_none());
    }

    #[test]
    fn test_highlight_rule() {
        let mut d = director();
        assert!(!d.is_highlighted("A"));

        d.set_hover(Some("B".to_string()));
        assert!(d.is_highlighted("B"));
        assert!(!d.is_highlighted("A"));

        d.select("A", Vec3::new(10.0, 0.0, 0.0), 0.0);
        assert!(d.is_highlighted("A"));
        assert!(d.is_highlighted("B"));

        d.set_hover(None);
        assert!(!d.is_highlighted("B"));
        assert_eq!(d.state(), FocusState::Focusing);
    }
}
