//! # Trajectory state library
//!
//! This library represents the discrete samples ("states") of a precomputed
//! robot motion trajectory used for autonomous path following, and the pure
//! transforms over them:
//!
//! - [`TrajectoryState::interpolate`] blends two adjacent states to answer
//!   "where should the robot be at an arbitrary intermediate time",
//! - [`TrajectoryState::reverse`] produces the state to command when a
//!   differential drivetrain must follow a forward-authored path backwards,
//! - [`TrajectoryState::flip`] mirrors a state to the opposite alliance side
//!   of a symmetric field, keeping a single fixed origin.
//!
//! [`Trajectory`] holds an ordered sequence of states and samples it at
//! arbitrary query times.
//!
//! All transforms are pure: they never mutate their inputs, consult no hidden
//! state, and are safe to call concurrently on shared (read-only) states.
//! Angle handling is delegated to `geom_util` so that pose headings, target
//! headings and module headings all wrap identically.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod constraints;
mod flip;
mod interpolate;
pub mod params;
mod reverse;
pub mod speeds;
pub mod state;
pub mod trajectory;

// ---------------------------------------------------------------------------
// REEXPORTS
// ---------------------------------------------------------------------------

pub use constraints::PathConstraints;
pub use params::FieldParams;
pub use speeds::ChassisSpeeds;
pub use state::{ModuleState, TrajError, TrajectoryState};
pub use trajectory::Trajectory;
