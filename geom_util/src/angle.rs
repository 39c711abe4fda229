//! Wrap-safe angle functions
//!
//! All angles are in radians and are normalised to the canonical range
//! [-pi, pi). Interpolation always follows the shortest arc between the two
//! angles, so blending 170 deg with -170 deg passes through +/-180 deg and
//! never through 0 deg.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::f64::consts::{PI, TAU};

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Normalise an angle into the canonical range [-pi, pi).
pub fn normalise(angle_rad: f64) -> f64 {
    (angle_rad + PI).rem_euclid(TAU) - PI
}

/// Get the signed shortest-arc distance from `a` to `b`.
///
/// The result is in [-pi, pi), accounting for wrapping, so that
/// `a + ang_dist(a, b)` is coterminal with `b`.
pub fn ang_dist(a_rad: f64, b_rad: f64) -> f64 {
    normalise(b_rad - a_rad)
}

/// Interpolate between two angles along the shortest arc.
///
/// `t` is the blend factor, with 0 giving `a` and 1 giving `b`. The result is
/// normalised to [-pi, pi). Note that raw linear interpolation of the two
/// values would be up to 180 deg wrong near the wrap boundary, which is why
/// all angular blending goes through this function.
pub fn interpolate(a_rad: f64, b_rad: f64, t: f64) -> f64 {
    normalise(a_rad + ang_dist(a_rad, b_rad) * t)
}

/// Rotate an angle by half a turn, normalised.
pub fn rotate_pi(angle_rad: f64) -> f64 {
    normalise(angle_rad + PI)
}

/// Mirror an angle about the field's Y axis (theta -> pi - theta), normalised.
pub fn mirror_x(angle_rad: f64) -> f64 {
    normalise(PI - angle_rad)
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
