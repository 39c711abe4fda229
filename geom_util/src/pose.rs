//! # Planar field pose
//!
//! A 2D pose (position and heading) in the fixed field frame. Ground
//! trajectories are planar so the pose is kept flat rather than carrying a
//! full 3D attitude.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

// Internal
use crate::{angle, maths::lerp};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The pose (position and heading in the field frame) of the robot.
///
/// Heading is the angle to the positive field X axis in radians, normalised
/// to [-pi, pi).
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Pose {
    /// The position in the field frame
    pub position_m: Vector2<f64>,

    /// The heading in the field frame
    pub heading_rad: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Pose {
    pub fn new(x_m: f64, y_m: f64, heading_rad: f64) -> Self {
        Self {
            position_m: Vector2::new(x_m, y_m),
            heading_rad: angle::normalise(heading_rad),
        }
    }

    /// Interpolate between this pose and `other`.
    ///
    /// The position is blended linearly and the heading along the shortest
    /// arc.
    pub fn interpolate(&self, other: &Pose, t: f64) -> Pose {
        Pose {
            position_m: Vector2::new(
                lerp(self.position_m[0], other.position_m[0], t),
                lerp(self.position_m[1], other.position_m[1], t),
            ),
            heading_rad: angle::interpolate(self.heading_rad, other.heading_rad, t),
        }
    }

    /// Get this pose with the heading rotated by half a turn, position
    /// unchanged.
    pub fn rotated_pi(&self) -> Pose {
        Pose {
            position_m: self.position_m,
            heading_rad: angle::rotate_pi(self.heading_rad),
        }
    }

    /// Mirror this pose about the centreline of a field of the given length.
    ///
    /// Maps x to `length_m - x` and the heading to `pi - heading`, leaving y
    /// unchanged.
    pub fn mirror_x(&self, length_m: f64) -> Pose {
        Pose {
            position_m: Vector2::new(length_m - self.position_m[0], self.position_m[1]),
            heading_rad: angle::mirror_x(self.heading_rad),
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
