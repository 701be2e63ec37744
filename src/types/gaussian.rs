//! Gaussian belief over a scalar quantity
//!
//! A [`Gaussian`] is an immutable (mean, variance) pair. The only way to obtain
//! one is through a validating constructor, so every value in circulation is a
//! proper normal distribution: finite mean, finite and strictly positive
//! variance. Deserialization goes through the same check.

use serde::{Deserialize, Serialize};

use crate::filter::FilterError;

/// Variance of the default starting belief; large enough that the first
/// measurement dominates.
pub const INITIAL_VARIANCE: f64 = 1000.0;

/// Normal distribution N(mean, variance) describing belief about a scalar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GaussianRepr")]
pub struct Gaussian {
    mean: f64,
    variance: f64,
}

impl Gaussian {
    /// Create a belief, rejecting non-positive or non-finite variance
    pub fn new(mean: f64, variance: f64) -> Result<Self, FilterError> {
        if !mean.is_finite() || !variance.is_finite() || variance <= 0.0 {
            return Err(FilterError::invalid_distribution(mean, variance));
        }
        Ok(Self { mean, variance })
    }

    /// Conventional unit prior N(0, 1)
    ///
    /// This is an arbitrary placeholder, not a non-informative prior. Callers
    /// that want to express ignorance should pass a large variance instead.
    pub fn default_prior() -> Self {
        Self {
            mean: 0.0,
            variance: 1.0,
        }
    }

    /// High-uncertainty starting belief N(0, [`INITIAL_VARIANCE`])
    pub fn initial_belief() -> Self {
        Self {
            mean: 0.0,
            variance: INITIAL_VARIANCE,
        }
    }

    /// Expected value
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Variance (always > 0)
    #[inline]
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Standard deviation
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Precision (inverse variance)
    #[inline]
    pub fn precision(&self) -> f64 {
        1.0 / self.variance
    }
}

/// Unchecked wire form, validated on the way in
#[derive(Deserialize)]
struct GaussianRepr {
    mean: f64,
    variance: f64,
}

impl TryFrom<GaussianRepr> for Gaussian {
    type Error = FilterError;

    fn try_from(repr: GaussianRepr) -> Result<Self, Self::Error> {
        Gaussian::new(repr.mean, repr.variance)
    }
}
