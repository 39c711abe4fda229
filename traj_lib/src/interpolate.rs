//! State interpolation calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::trace;

// Internal
use crate::state::{ModuleState, TrajError, TrajectoryState};
use geom_util::{angle, maths::lerp};

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl TrajectoryState {
    /// Interpolate between this state and `end`.
    ///
    /// `t` is the normalised blend factor, with 0 giving this state and 1
    /// giving `end`. Values outside [0, 1] are clamped rather than rejected,
    /// since samplers routinely probe segment boundaries with factors just
    /// outside the range due to floating point rounding. Clamping, not
    /// extrapolation, is the defined behaviour.
    ///
    /// All angular fields (pose heading, target heading, module headings) are
    /// blended along the shortest arc. The constraint envelope is not blended
    /// numerically, the envelope of the nearer endpoint is taken instead
    /// (`t < 0.5` takes this state's, otherwise `end`'s).
    ///
    /// Both states must come from the same trajectory:
    /// [`TrajError::DimensionMismatch`] is returned if the module-state or
    /// motor-current counts disagree.
    pub fn interpolate(&self, end: &TrajectoryState, t: f64) -> Result<TrajectoryState, TrajError> {
        self.check_dimensions(end)?;

        let t = if !(0.0..=1.0).contains(&t) {
            trace!("Blend factor {} outside [0, 1], clamping", t);
            t.max(0.0).min(1.0)
        } else {
            t
        };

        let module_states: Vec<ModuleState> = self
            .module_states
            .iter()
            .zip(end.module_states.iter())
            .map(|(a, b)| ModuleState {
                position_m: nalgebra::Vector2::new(
                    lerp(a.position_m[0], b.position_m[0], t),
                    lerp(a.position_m[1], b.position_m[1], t),
                ),
                speed_ms: lerp(a.speed_ms, b.speed_ms, t),
                heading_rad: angle::interpolate(a.heading_rad, b.heading_rad, t),
            })
            .collect();

        let motor_currents_a: Vec<f64> = self
            .motor_currents_a
            .iter()
            .zip(end.motor_currents_a.iter())
            .map(|(a, b)| lerp(*a, *b, t))
            .collect();

        Ok(TrajectoryState {
            time_s: lerp(self.time_s, end.time_s, t),
            field_speeds: self.field_speeds.interpolate(&end.field_speeds, t),
            pose: self.pose.interpolate(&end.pose, t),
            linear_vel_ms: lerp(self.linear_vel_ms, end.linear_vel_ms, t),
            motor_currents_a,
            target_heading_rad: angle::interpolate(
                self.target_heading_rad,
                end.target_heading_rad,
                t,
            ),
            delta_pos_m: lerp(self.delta_pos_m, end.delta_pos_m, t),
            delta_rot_rad: lerp(self.delta_rot_rad, end.delta_rot_rad, t),
            module_states,
            constraints: if t < 0.5 {
                self.constraints
            } else {
                end.constraints
            },
            waypoint_relative_pos: lerp(self.waypoint_relative_pos, end.waypoint_relative_pos, t),
        })
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::{constraints::PathConstraints, speeds::ChassisSpeeds};
    use geom_util::Pose;
    use nalgebra::Vector2;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    /// Pair of structurally compatible states used by most of the tests
    fn test_states() -> (TrajectoryState, TrajectoryState) {
        let a = TrajectoryState {
            time_s: 0.0,
            field_speeds: ChassisSpeeds::new(2.0, 0.0, 1.0),
            pose: Pose::new(1.0, 2.0, 0.0),
            linear_vel_ms: 2.0,
            motor_currents_a: vec![10.0, 20.0],
            target_heading_rad: 0.0,
            delta_pos_m: 0.0,
            delta_rot_rad: 0.0,
            module_states: vec![
                ModuleState::new(Vector2::new(1.2, 2.2), 2.0, 0.0),
                ModuleState::new(Vector2::new(0.8, 1.8), 2.0, 0.0),
            ],
            constraints: PathConstraints::new(4.0, 3.0, 6.0, 8.0),
            waypoint_relative_pos: 0.0,
        };

        let b = TrajectoryState {
            time_s: 1.0,
            field_speeds: ChassisSpeeds::new(4.0, 2.0, -1.0),
            pose: Pose::new(3.0, 2.0, PI / 2.0),
            linear_vel_ms: 4.0,
            motor_currents_a: vec![30.0, 40.0],
            target_heading_rad: PI / 2.0,
            delta_pos_m: 2.0,
            delta_rot_rad: PI / 2.0,
            module_states: vec![
                ModuleState::new(Vector2::new(3.2, 2.2), 4.0, PI / 2.0),
                ModuleState::new(Vector2::new(2.8, 1.8), 4.0, PI / 2.0),
            ],
            constraints: PathConstraints::new(5.0, 3.5, 7.0, 9.0),
            waypoint_relative_pos: 1.0,
        };

        (a, b)
    }

    #[test]
    fn test_endpoints() {
        let (a, b) = test_states();

        let at_start = a.interpolate(&b, 0.0).unwrap();
        assert!((at_start.time_s - a.time_s).abs() < TOL);
        assert!((at_start.pose.position_m[0] - a.pose.position_m[0]).abs() < TOL);
        assert!((at_start.pose.heading_rad - a.pose.heading_rad).abs() < TOL);
        assert!((at_start.linear_vel_ms - a.linear_vel_ms).abs() < TOL);
        assert!((at_start.field_speeds.vx_ms - a.field_speeds.vx_ms).abs() < TOL);
        assert!((at_start.motor_currents_a[0] - a.motor_currents_a[0]).abs() < TOL);
        assert!((at_start.module_states[1].speed_ms - a.module_states[1].speed_ms).abs() < TOL);
        assert_eq!(at_start.constraints, a.constraints);

        let at_end = a.interpolate(&b, 1.0).unwrap();
        assert!((at_end.time_s - b.time_s).abs() < TOL);
        assert!((at_end.pose.position_m[0] - b.pose.position_m[0]).abs() < TOL);
        assert!((at_end.pose.heading_rad - b.pose.heading_rad).abs() < TOL);
        assert!((at_end.linear_vel_ms - b.linear_vel_ms).abs() < TOL);
        assert!((at_end.waypoint_relative_pos - b.waypoint_relative_pos).abs() < TOL);
        assert_eq!(at_end.constraints, b.constraints);
    }

    #[test]
    fn test_midpoint() {
        let (a, b) = test_states();

        let mid = a.interpolate(&b, 0.5).unwrap();
        assert!((mid.time_s - 0.5).abs() < TOL);
        assert!((mid.pose.position_m[0] - 2.0).abs() < TOL);
        assert!((mid.pose.position_m[1] - 2.0).abs() < TOL);
        assert!((mid.pose.heading_rad - PI / 4.0).abs() < TOL);
        assert!((mid.linear_vel_ms - 3.0).abs() < TOL);
        assert!((mid.field_speeds.vx_ms - 3.0).abs() < TOL);
        assert!((mid.field_speeds.vy_ms - 1.0).abs() < TOL);
        assert!((mid.field_speeds.omega_rads - 0.0).abs() < TOL);
        assert!((mid.motor_currents_a[0] - 20.0).abs() < TOL);
        assert!((mid.motor_currents_a[1] - 30.0).abs() < TOL);
        assert!((mid.target_heading_rad - PI / 4.0).abs() < TOL);
        assert!((mid.delta_pos_m - 1.0).abs() < TOL);
        assert!((mid.module_states[0].position_m[0] - 2.2).abs() < TOL);
        assert!((mid.module_states[0].speed_ms - 3.0).abs() < TOL);
        assert!((mid.module_states[0].heading_rad - PI / 4.0).abs() < TOL);
        assert!((mid.waypoint_relative_pos - 0.5).abs() < TOL);
    }

    #[test]
    fn test_heading_wrap() {
        // 170 deg to -170 deg must interpolate through +/-180 deg, not 0 deg
        let (mut a, mut b) = test_states();
        a.pose.heading_rad = 170f64.to_radians();
        b.pose.heading_rad = -170f64.to_radians();
        a.target_heading_rad = 170f64.to_radians();
        b.target_heading_rad = -170f64.to_radians();

        let mid = a.interpolate(&b, 0.5).unwrap();
        assert!((mid.pose.heading_rad.abs() - PI).abs() < TOL);
        assert!((mid.target_heading_rad.abs() - PI).abs() < TOL);
    }

    #[test]
    fn test_clamp() {
        let (a, b) = test_states();

        // Below range behaves as t = 0, above as t = 1
        let below = a.interpolate(&b, -0.25).unwrap();
        assert!((below.time_s - a.time_s).abs() < TOL);
        assert!((below.pose.position_m[0] - a.pose.position_m[0]).abs() < TOL);

        let above = a.interpolate(&b, 1.25).unwrap();
        assert!((above.time_s - b.time_s).abs() < TOL);
        assert!((above.pose.position_m[0] - b.pose.position_m[0]).abs() < TOL);
    }

    #[test]
    fn test_constraints_nearest_endpoint() {
        let (a, b) = test_states();

        assert_eq!(a.interpolate(&b, 0.25).unwrap().constraints, a.constraints);
        assert_eq!(a.interpolate(&b, 0.75).unwrap().constraints, b.constraints);
        // Exactly halfway takes the end's envelope
        assert_eq!(a.interpolate(&b, 0.5).unwrap().constraints, b.constraints);
    }

    #[test]
    fn test_dimension_mismatch() {
        let (a, mut b) = test_states();

        b.module_states.pop();
        assert!(matches!(
            a.interpolate(&b, 0.5),
            Err(TrajError::DimensionMismatch("module_states", 2, 1))
        ));

        b.module_states.push(ModuleState::default());
        b.motor_currents_a.pop();
        assert!(matches!(
            a.interpolate(&b, 0.5),
            Err(TrajError::DimensionMismatch("motor_currents_a", 2, 1))
        ));
    }

    #[test]
    fn test_inputs_unchanged() {
        let (a, b) = test_states();
        let a_before = format!("{:?}", a);
        let b_before = format!("{:?}", b);

        let _ = a.interpolate(&b, 0.3).unwrap();

        assert_eq!(format!("{:?}", a), a_before);
        assert_eq!(format!("{:?}", b), b_before);
    }
}
