//! Autonomous orbit around the scene origin.

use std::f32::consts::TAU;

use bevy::math::Vec3;

/// Orbit parameters and the current angle.
///
/// The camera travels a horizontal circle of `radius` at height `elevation`,
/// advancing `speed` radians per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Current angle in radians, kept in `[0, 2π)`.
    angle: f32,
    /// Radians advanced per tick.
    pub speed: f32,
    /// Horizontal distance from the Y axis.
    pub radius: f32,
    /// Height of the orbit plane.
    pub elevation: f32,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self::new(1300.0, 0.0, std::f32::consts::PI / 40_000.0)
    }
}

impl OrbitState {
    /// Create an orbit starting at angle zero.
    pub fn new(radius: f32, elevation: f32, speed: f32) -> Self {
        Self {
            angle: 0.0,
            speed,
            radius,
            elevation,
        }
    }

    /// Current angle in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Camera position for the current angle.
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.angle.sin(),
            self.elevation,
            self.radius * self.angle.cos(),
        )
    }

    /// Advance one tick and return the new camera position.
    pub fn advance(&mut self) -> Vec3 {
        self.angle = (self.angle + self.speed).rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU
        if self.angle >= TAU {
            self.angle = 0.0;
        }
        self.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_on_positive_z() {
        let orbit = OrbitState::default();
        assert!((orbit.position() - Vec3::new(0.0, 0.0, 1300.0)).length() < 1e-3);
    }

    #[test]
    fn test_advance_stays_on_circle() {
        let mut orbit = OrbitState::new(500.0, 25.0, 0.01);
        for _ in 0..1000 {
            let prev = orbit.angle();
            let pos = orbit.advance();
            assert!((pos.y - 25.0).abs() < 1e-4);
            assert!(((pos.x * pos.x + pos.z * pos.z).sqrt() - 500.0).abs() < 1e-2);

            let expected = (prev + 0.01) % TAU;
            assert!((orbit.angle() - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_angle_wraps() {
        let mut orbit = OrbitState::new(10.0, 0.0, 1.0);
        for _ in 0..20 {
            orbit.advance();
            assert!(orbit.angle() >= 0.0 && orbit.angle() < TAU);
        }
    }

    #[test]
    fn test_angle_stays_in_range_for_any_speed() {
        for speed in [-0.5, 20.0, TAU, -TAU * 3.5] {
            let mut orbit = OrbitState::new(10.0, 0.0, speed);
            for _ in 0..5 {
                orbit.advance();
                assert!(
                    orbit.angle() >= 0.0 && orbit.angle() < TAU,
                    "speed {} left angle at {}",
                    speed,
                    orbit.angle()
                );
            }
        }
    }

    #[test]
    fn test_quarter_turn_position() {
        let mut orbit = OrbitState::new(100.0, 0.0, std::f32::consts::FRAC_PI_2);
        let pos = orbit.advance();
        assert!((pos - Vec3::new(100.0, 0.0, 0.0)).length() < 1e-3);
    }
}
