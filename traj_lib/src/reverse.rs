//! State reversal calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
use crate::state::{ModuleState, TrajectoryState};
use geom_util::angle;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl TrajectoryState {
    /// Get this state reversed, used when a differential drivetrain must
    /// follow a forward-authored path while driving backwards.
    ///
    /// The chassis heading and target heading rotate by half a turn, the
    /// translational speeds and the linear/wheel velocities negate, and the
    /// angular velocity is unchanged (turning sense does not depend on the
    /// direction of travel). Time, pose translation, accumulated deltas,
    /// waypoint progress and the constraint envelope are frame-invariant and
    /// pass through untouched.
    ///
    /// Motor currents are unchanged: current is treated as
    /// direction-independent motor load, not a signed quantity tied to the
    /// commanded direction.
    ///
    /// Reversal is an involution, `s.reverse().reverse()` recovers `s` up to
    /// floating tolerance.
    pub fn reverse(&self) -> TrajectoryState {
        let module_states: Vec<ModuleState> = self
            .module_states
            .iter()
            .map(|m| ModuleState {
                position_m: m.position_m,
                speed_ms: -m.speed_ms,
                heading_rad: angle::rotate_pi(m.heading_rad),
            })
            .collect();

        let mut field_speeds = self.field_speeds;
        field_speeds.vx_ms = -field_speeds.vx_ms;
        field_speeds.vy_ms = -field_speeds.vy_ms;

        TrajectoryState {
            time_s: self.time_s,
            field_speeds,
            pose: self.pose.rotated_pi(),
            linear_vel_ms: -self.linear_vel_ms,
            motor_currents_a: self.motor_currents_a.clone(),
            target_heading_rad: angle::rotate_pi(self.target_heading_rad),
            delta_pos_m: self.delta_pos_m,
            delta_rot_rad: self.delta_rot_rad,
            module_states,
            constraints: self.constraints,
            waypoint_relative_pos: self.waypoint_relative_pos,
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
