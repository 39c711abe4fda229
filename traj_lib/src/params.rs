//! Field parameter loading
//!
//! The field geometry is an externally-supplied input, nothing in the core is
//! hardcoded to a particular field. Parameters are plain structs loadable
//! from TOML files.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;
use thiserror::Error;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Geometry of the field a trajectory is authored for.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct FieldParams {
    /// The length of the field along its X axis. The field layout is assumed
    /// symmetric about the centreline `x = length_m / 2`.
    ///
    /// Units: meters
    pub length_m: f64,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// An error that occurs during loading of a parameter file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot load the parameter file: {0}")]
    FileLoadError(std::io::Error),

    #[error("Cannot read the parameter file: {0}")]
    DeserialiseError(toml::de::Error),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl FieldParams {
    /// Load field parameters from a TOML file at the given path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let params_str = read_to_string(path).map_err(LoadError::FileLoadError)?;

        toml::from_str(params_str.as_str()).map_err(LoadError::DeserialiseError)
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
