//! Field-relative chassis speeds

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};

// Internal
use geom_util::maths::lerp;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The translational and rotational velocity of the chassis, expressed in the
/// fixed field frame (not the robot body frame).
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct ChassisSpeeds {
    /// Velocity along the field X axis.
    ///
    /// Units: meters/second
    pub vx_ms: f64,

    /// Velocity along the field Y axis.
    ///
    /// Units: meters/second
    pub vy_ms: f64,

    /// Angular velocity, positive counter-clockwise.
    ///
    /// Units: radians/second
    pub omega_rads: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ChassisSpeeds {
    pub fn new(vx_ms: f64, vy_ms: f64, omega_rads: f64) -> Self {
        Self {
            vx_ms,
            vy_ms,
            omega_rads,
        }
    }

    /// Interpolate between this and another set of speeds, component-wise.
    pub fn interpolate(&self, other: &ChassisSpeeds, t: f64) -> ChassisSpeeds {
        ChassisSpeeds {
            vx_ms: lerp(self.vx_ms, other.vx_ms, t),
            vy_ms: lerp(self.vy_ms, other.vy_ms, t),
            omega_rads: lerp(self.omega_rads, other.omega_rads, t),
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
