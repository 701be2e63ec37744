//! Output types for filter results

use serde::Serialize;

use super::Gaussian;

/// Beliefs observed during one update/predict cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepRecord {
    /// Step index (0-based)
    pub step: usize,
    /// Belief before the measurement update
    pub initial: Gaussian,
    /// Measurement fused in this step
    pub measurement: Gaussian,
    /// Belief after the measurement update
    pub updated: Gaussian,
    /// Belief after motion prediction; the next step's initial belief
    pub predicted: Gaussian,
}

impl StepRecord {
    /// Create a new step record
    pub fn new(
        step: usize,
        initial: Gaussian,
        measurement: Gaussian,
        updated: Gaussian,
        predicted: Gaussian,
    ) -> Self {
        Self {
            step,
            initial,
            measurement,
            updated,
            predicted,
        }
    }

    /// Innovation: measurement mean minus prior mean
    #[inline]
    pub fn innovation(&self) -> f64 {
        self.measurement.mean() - self.initial.mean()
    }

    /// Weight given to the measurement during fusion (the scalar Kalman gain)
    #[inline]
    pub fn gain(&self) -> f64 {
        self.initial.variance() / (self.initial.variance() + self.measurement.variance())
    }
}
