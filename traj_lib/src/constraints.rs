//! Kinematic and dynamic path constraints

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The kinematic/dynamic envelope in force at one instant of a trajectory.
///
/// Constraints are supplied by the trajectory generator per state. They are
/// never blended numerically when interpolating between states, the envelope
/// of the nearer endpoint is taken instead (see
/// [`TrajectoryState::interpolate`](crate::TrajectoryState::interpolate)).
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathConstraints {
    /// Maximum linear velocity.
    ///
    /// Units: meters/second
    pub max_vel_ms: f64,

    /// Maximum linear acceleration.
    ///
    /// Units: meters/second^2
    pub max_acc_mss: f64,

    /// Maximum angular velocity.
    ///
    /// Units: radians/second
    pub max_ang_vel_rads: f64,

    /// Maximum angular acceleration.
    ///
    /// Units: radians/second^2
    pub max_ang_acc_radss: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl PathConstraints {
    pub fn new(
        max_vel_ms: f64,
        max_acc_mss: f64,
        max_ang_vel_rads: f64,
        max_ang_acc_radss: f64,
    ) -> Self {
        Self {
            max_vel_ms,
            max_acc_mss,
            max_ang_vel_rads,
            max_ang_acc_radss,
        }
    }
}
