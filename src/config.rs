//! Configuration for the scalar filter
//!
//! A [`FilterConfig`] fixes the two beliefs that do not come from the
//! measurement stream: where the filter starts and how the tracked quantity
//! moves between measurements.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::filter::FilterError;
use crate::types::Gaussian;

pub use crate::types::INITIAL_VARIANCE;

/// Initial belief and motion model for a filter run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Belief before the first measurement
    #[serde(default = "Gaussian::initial_belief")]
    pub initial_state: Gaussian,
    /// Displacement applied at every prediction step
    #[serde(default = "Gaussian::default_prior")]
    pub motion: Gaussian,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            initial_state: Gaussian::initial_belief(),
            motion: Gaussian::default_prior(),
        }
    }
}

impl FilterConfig {
    /// Create a new configuration
    pub fn new(initial_state: Gaussian, motion: Gaussian) -> Self {
        Self {
            initial_state,
            motion,
        }
    }

    /// Replace the initial belief
    pub fn with_initial_state(mut self, initial_state: Gaussian) -> Self {
        self.initial_state = initial_state;
        self
    }

    /// Replace the motion model
    pub fn with_motion(mut self, motion: Gaussian) -> Self {
        self.motion = motion;
        self
    }

    /// Parse a configuration from JSON
    ///
    /// Missing fields fall back to the defaults; Gaussians are validated.
    pub fn from_json_str(json: &str) -> Result<Self, FilterError> {
        serde_json::from_str(json).map_err(|e| FilterError::Configuration {
            description: e.to_string(),
        })
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, FilterError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| FilterError::Configuration {
            description: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_json_str(&contents)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, FilterError> {
        serde_json::to_string_pretty(self).map_err(|e| FilterError::Configuration {
            description: e.to_string(),
        })
    }
}
