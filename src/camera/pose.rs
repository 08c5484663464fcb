//! Camera pose and focus geometry.

use bevy::math::Vec3;

/// Below this length a node is treated as sitting on the scene origin.
const ORIGIN_EPSILON: f32 = 1e-4;

/// One complete camera configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position in world space.
    pub position: Vec3,
    /// Look-at point.
    pub target: Vec3,
}

impl CameraPose {
    /// Create a pose from a position and look-at point.
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Pose looking at the scene origin from `position`.
    pub const fn looking_at_origin(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO)
    }

    /// Linear interpolation of both position and target.
    pub fn lerp(from: &CameraPose, to: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            position: from.position.lerp(to.position, t),
            target: from.target.lerp(to.target, t),
        }
    }

    /// True when both points are within `tolerance` of `other`'s.
    pub fn approx_eq(&self, other: &CameraPose, tolerance: f32) -> bool {
        self.position.distance(other.position) <= tolerance
            && self.target.distance(other.target) <= tolerance
    }
}

/// Compute the pose that frames a node from outside the scene.
///
/// The camera sits on the ray from the origin through `node`, `standoff`
/// units beyond it, looking back at the node. A node on the origin has no
/// such ray, so the camera is pushed out along +Z instead.
pub fn focus_pose(node: Vec3, standoff: f32) -> CameraPose {
    let distance = node.length();
    let position = if distance < ORIGIN_EPSILON {
        node + Vec3::Z * standoff
    } else {
        node * (1.0 + standoff / distance)
    };
    CameraPose::new(position, node)
}
