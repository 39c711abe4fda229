//! Generic maths helpers

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Linearly interpolate between `a` and `b`.
///
/// `t = 0` gives `a` and `t = 1` gives `b`. No clamping is performed here,
/// callers decide their own out-of-range policy.
pub fn lerp<T>(a: T, b: T, t: T) -> T
where
    T: Float,
{
    a + (b - a) * t
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
