//! Error types for the filter and its components
//!
//! The core transitions have a single failure mode: a Gaussian that is not a
//! valid probability distribution. Configuration errors only arise in the
//! loading layer around the core.

use std::fmt;

/// Errors that can occur while building or propagating beliefs
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A Gaussian with non-finite mean or non-positive / non-finite variance
    InvalidDistribution {
        /// Offending mean
        mean: f64,
        /// Offending variance
        variance: f64,
    },

    /// Configuration error
    Configuration {
        /// Description of the configuration issue
        description: String,
    },
}

impl FilterError {
    /// Shorthand for an [`FilterError::InvalidDistribution`]
    pub fn invalid_distribution(mean: f64, variance: f64) -> Self {
        FilterError::InvalidDistribution { mean, variance }
    }

    /// Whether this is the core invalid-distribution condition
    pub fn is_invalid_distribution(&self) -> bool {
        matches!(self, FilterError::InvalidDistribution { .. })
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidDistribution { mean, variance } => {
                write!(
                    f,
                    "Invalid distribution N({}, {}): variance must be finite and strictly positive, mean must be finite",
                    mean, variance
                )
            }
            FilterError::Configuration { description } => {
                write!(f, "Configuration error: {}", description)
            }
        }
    }
}

impl std::error::Error for FilterError {}
