//! # Trajectory container
//!
//! An ordered sequence of [`TrajectoryState`]s produced by a trajectory
//! generator, sampled at arbitrary query times by a follower. The container
//! never mutates its states, sampling interpolates between the bracketing
//! pair and whole-trajectory transforms yield a new trajectory.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};

// Internal
use crate::{
    params::FieldParams,
    state::{TrajError, TrajectoryState},
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A generated trajectory as an ordered sequence of states.
///
/// States are assumed ordered by non-decreasing time, with module-state and
/// motor-current counts constant across the sequence. Both are the
/// generator's responsibility, the container only checks structure when two
/// states are actually combined.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trajectory {
    states: Vec<TrajectoryState>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Trajectory {
    pub fn new(states: Vec<TrajectoryState>) -> Self {
        Self { states }
    }

    /// Get all states of the trajectory.
    pub fn states(&self) -> &[TrajectoryState] {
        &self.states
    }

    /// Get the state at the given index, or `None` if out of range.
    pub fn state(&self, index: usize) -> Option<&TrajectoryState> {
        self.states.get(index)
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Get the total run time of the trajectory in seconds, 0 if the
    /// trajectory is empty.
    pub fn total_time_s(&self) -> f64 {
        match self.states.last() {
            Some(s) => s.time_s,
            None => 0.0,
        }
    }

    /// Sample the trajectory at the given time.
    ///
    /// Times before the first state or after the last clamp to that state.
    /// Otherwise the bracketing pair of states is located and interpolated at
    /// the normalised time fraction between them.
    pub fn sample(&self, time_s: f64) -> Result<TrajectoryState, TrajError> {
        let first = match self.states.first() {
            Some(s) => s,
            None => return Err(TrajError::EmptyTrajectory),
        };
        if time_s <= first.time_s {
            return Ok(first.clone());
        }

        let last = &self.states[self.states.len() - 1];
        if time_s >= last.time_s {
            return Ok(last.clone());
        }

        // Binary search for the first state at or after the query time
        let mut low = 1;
        let mut high = self.states.len() - 1;
        while low != high {
            let mid = (low + high) / 2;
            if self.states[mid].time_s < time_s {
                low = mid + 1;
            } else {
                high = mid;
            }
        }

        let next = &self.states[low];
        let prev = &self.states[low - 1];
        let dt = next.time_s - prev.time_s;

        // Repeated timestamps would make the fraction blow up, just take the
        // later state
        if dt <= f64::EPSILON {
            return Ok(next.clone());
        }

        prev.interpolate(next, (time_s - prev.time_s) / dt)
    }

    /// Get this trajectory reversed for backwards following with a
    /// differential drivetrain, see [`TrajectoryState::reverse`].
    pub fn reverse(&self) -> Trajectory {
        Trajectory {
            states: self.states.iter().map(|s| s.reverse()).collect(),
        }
    }

    /// Get this trajectory flipped to the other alliance side of the field,
    /// see [`TrajectoryState::flip`].
    pub fn flip(&self, field: &FieldParams) -> Trajectory {
        Trajectory {
            states: self.states.iter().map(|s| s.flip(field)).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
