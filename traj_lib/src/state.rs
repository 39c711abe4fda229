//! # Trajectory state
//!
//! One timestamped sample of a planned trajectory, with the per-module detail
//! needed to command a swerve or differential drivetrain. States are plain
//! value types: the generator produces them, the follower and the transforms
//! in this crate consume them read-only, and every transform yields a new
//! independent value.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

// Internal
use crate::{constraints::PathConstraints, speeds::ChassisSpeeds};
use geom_util::Pose;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The kinematic sample of a single drive module at one trajectory instant.
///
/// For a swerve drivetrain this is one steerable wheel assembly, for a
/// differential drivetrain one side's wheel set. Module positions are
/// field-relative.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct ModuleState {
    /// The position of the module in the field frame
    pub position_m: Vector2<f64>,

    /// Signed wheel speed.
    ///
    /// Units: meters/second
    pub speed_ms: f64,

    /// The heading of the module in the field frame, normalised to [-pi, pi).
    pub heading_rad: f64,
}

/// One instant of a planned trajectory.
///
/// The number of module states and motor currents is fixed by the robot
/// configuration and must be identical across every state of a trajectory,
/// and across any two states combined by
/// [`interpolate`](TrajectoryState::interpolate).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrajectoryState {
    /// Time of this sample from the start of the trajectory.
    ///
    /// Units: seconds
    pub time_s: f64,

    /// Chassis speeds in the field frame
    pub field_speeds: ChassisSpeeds,

    /// The pose of the robot in the field frame
    pub pose: Pose,

    /// Signed magnitude of the translational velocity along the path tangent.
    ///
    /// Units: meters/second
    pub linear_vel_ms: f64,

    /// Torque-current of each drive motor, one entry per drive actuator.
    ///
    /// Units: amperes
    pub motor_currents_a: Vec<f64>,

    /// Rotation target for holonomic drivetrains, decoupled from the pose
    /// heading. Normalised to [-pi, pi).
    pub target_heading_rad: f64,

    /// Distance accumulated since the previous waypoint.
    ///
    /// Units: meters
    pub delta_pos_m: f64,

    /// Rotation accumulated since the previous waypoint.
    ///
    /// Units: radians
    pub delta_rot_rad: f64,

    /// Per-module kinematic samples, one entry per drive module
    pub module_states: Vec<ModuleState>,

    /// The constraint envelope in force at this instant
    pub constraints: PathConstraints,

    /// Normalised progress along the current path segment, in [0, 1] within
    /// one segment, resetting at waypoint boundaries.
    pub waypoint_relative_pos: f64,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors when operating on trajectory states.
#[derive(Debug, thiserror::Error)]
pub enum TrajError {
    /// The two states handed to `interpolate` disagree on the number of
    /// module states or motor currents, so they cannot come from the same
    /// trajectory/robot configuration. This is a programming error upstream
    /// and is not recoverable at this layer.
    #[error("Cannot combine states from different robot configurations: {0} has {1} entries in one state and {2} in the other")]
    DimensionMismatch(&'static str, usize, usize),

    /// Attempted to sample a trajectory containing no states.
    #[error("The trajectory contains no states")]
    EmptyTrajectory,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ModuleState {
    pub fn new(position_m: Vector2<f64>, speed_ms: f64, heading_rad: f64) -> Self {
        Self {
            position_m,
            speed_ms,
            heading_rad: geom_util::angle::normalise(heading_rad),
        }
    }
}

impl TrajectoryState {
    /// Check that `other` has the same module-state and motor-current
    /// cardinalities as this state.
    pub(crate) fn check_dimensions(&self, other: &TrajectoryState) -> Result<(), TrajError> {
        if self.module_states.len() != other.module_states.len() {
            return Err(TrajError::DimensionMismatch(
                "module_states",
                self.module_states.len(),
                other.module_states.len(),
            ));
        }
        if self.motor_currents_a.len() != other.motor_currents_a.len() {
            return Err(TrajError::DimensionMismatch(
                "motor_currents_a",
                self.motor_currents_a.len(),
                other.motor_currents_a.len(),
            ));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
