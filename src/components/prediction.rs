//! Motion prediction: propagate a belief through a Gaussian process model
//!
//! The predicted quantity is the sum of the current state and an independent
//! Gaussian displacement, so means and variances both add:
//! - `μ' = μ + u`
//! - `σ'² = σ² + q`

use crate::filter::FilterError;
use crate::types::Gaussian;

/// Predict a belief forward through the motion model.
///
/// Uncertainty only grows. Fails with [`FilterError::InvalidDistribution`]
/// if the sum overflows.
#[inline]
pub fn predict_state(belief: &Gaussian, motion: &Gaussian) -> Result<Gaussian, FilterError> {
    Gaussian::new(
        belief.mean() + motion.mean(),
        belief.variance() + motion.variance(),
    )
}

/// Predict `steps` times with the same motion model.
///
/// Closed form of repeated [`predict_state`]: mean moves by `steps × u`,
/// variance grows by `steps × q`. Zero steps returns the belief unchanged.
pub fn predict_steps(belief: &Gaussian, motion: &Gaussian, steps: usize) -> Result<Gaussian, FilterError> {
    if steps == 0 {
        return Ok(*belief);
    }
    let n = steps as f64;
    Gaussian::new(
        belief.mean() + n * motion.mean(),
        belief.variance() + n * motion.variance(),
    )
}
