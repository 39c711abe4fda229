//! State alliance-flip calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
use crate::{
    params::FieldParams,
    state::{ModuleState, TrajectoryState},
};
use geom_util::angle;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl TrajectoryState {
    /// Get this state mirrored to the other alliance side of the field,
    /// maintaining the single fixed field origin.
    ///
    /// Positions map x to `L - x` (y unchanged) and every heading maps to
    /// `pi - heading`, where `L` is the field length from `field`. The field
    /// X speed and the angular velocity negate (a mirror reverses the turning
    /// sense), the field Y speed is unchanged. Time, linear velocity, motor
    /// currents, accumulated deltas, waypoint progress and the constraint
    /// envelope are frame-invariant and pass through untouched.
    ///
    /// For a fixed field length the flip is an involution,
    /// `s.flip(f).flip(f)` recovers `s` up to floating tolerance.
    pub fn flip(&self, field: &FieldParams) -> TrajectoryState {
        let module_states: Vec<ModuleState> = self
            .module_states
            .iter()
            .map(|m| ModuleState {
                position_m: nalgebra::Vector2::new(field.length_m - m.position_m[0], m.position_m[1]),
                speed_ms: m.speed_ms,
                heading_rad: angle::mirror_x(m.heading_rad),
            })
            .collect();

        let mut field_speeds = self.field_speeds;
        field_speeds.vx_ms = -field_speeds.vx_ms;
        field_speeds.omega_rads = -field_speeds.omega_rads;

        TrajectoryState {
            time_s: self.time_s,
            field_speeds,
            pose: self.pose.mirror_x(field.length_m),
            linear_vel_ms: self.linear_vel_ms,
            motor_currents_a: self.motor_currents_a.clone(),
            target_heading_rad: angle::mirror_x(self.target_heading_rad),
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
