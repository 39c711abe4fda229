//! # Geometry utility library
//!
//! Shared 2D geometry primitives for the trajectory library: wrap-safe angle
//! maths, a planar field pose, and generic float helpers. Every transform in
//! `traj_lib` delegates its angle handling here so that pose headings, target
//! headings and module headings all wrap the same way.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod angle;
pub mod maths;
pub mod pose;

// ---------------------------------------------------------------------------
// REEXPORTS
// ---------------------------------------------------------------------------

pub use pose::Pose;
