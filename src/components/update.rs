//! Measurement update: Bayesian fusion of two Gaussians.
//!
//! The product of two normal densities over the same quantity is, after
//! normalization, another normal density. Its precision is the sum of the
//! input precisions and its mean is the precision-weighted average of the
//! input means:
//!
//! ```text
//! μ' = (σ₂² μ₁ + σ₁² μ₂) / (σ₁² + σ₂²)
//! σ'² = 1 / (1/σ₁² + 1/σ₂²)
//! ```
//!
//! Fusing an independent observation never loses information, so the
//! posterior variance is below both input variances and the posterior mean
//! lies between the two input means.

use crate::filter::FilterError;
use crate::types::Gaussian;

/// Fuse a prior belief with a measurement into a posterior belief.
///
/// Symmetric in its arguments. Fails with
/// [`FilterError::InvalidDistribution`] if the posterior cannot be represented
/// (e.g. the fused variance underflows to zero).
#[inline]
pub fn update_measurement(prior: &Gaussian, measurement: &Gaussian) -> Result<Gaussian, FilterError> {
    let (mean1, var1) = (prior.mean(), prior.variance());
    let (mean2, var2) = (measurement.mean(), measurement.variance());

    // Normalized weights, formed from variance ratios so that neither the
    // variance sum nor the weighted means can overflow.
    let weight1 = 1.0 / (1.0 + var1 / var2);
    let weight2 = 1.0 / (1.0 + var2 / var1);

    let mean = weight1 * mean1 + weight2 * mean2;
    let variance = 1.0 / (1.0 / var1 + 1.0 / var2);

    Gaussian::new(mean, variance)
}

/// Fuse a prior with several measurements in sequence.
///
/// Equivalent to repeated [`update_measurement`]; the order does not affect
/// the result beyond floating-point rounding.
pub fn update_measurements<'a, I>(prior: &Gaussian, measurements: I) -> Result<Gaussian, FilterError>
where
    I: IntoIterator<Item = &'a Gaussian>,
{
    measurements
        .into_iter()
        .try_fold(*prior, |belief, z| update_measurement(&belief, z))
}
