//! Stateful driver for the scalar filter
//!
//! [`ScalarKalmanFilter`] holds the current belief and the fixed motion model
//! and sequences one measurement update followed by one prediction per
//! incoming measurement. The transitions themselves live in
//! [`crate::components`]; this type only threads state between them.

use crate::components::{predict_state, update_measurement};
use crate::config::FilterConfig;
use crate::reporter::{NoOpReporter, StepReporter};
use crate::types::{Gaussian, StepRecord};

use super::errors::FilterError;

/// One-dimensional Kalman filter over a stream of Gaussian measurements
#[derive(Debug, Clone)]
pub struct ScalarKalmanFilter<R: StepReporter = NoOpReporter> {
    config: FilterConfig,
    state: Gaussian,
    steps: usize,
    reporter: R,
}

impl ScalarKalmanFilter<NoOpReporter> {
    /// Create a filter starting at `config.initial_state`
    pub fn new(config: FilterConfig) -> Self {
        Self::with_reporter(config, NoOpReporter)
    }
}

impl<R: StepReporter> ScalarKalmanFilter<R> {
    /// Create a filter that reports every transition to `reporter`
    pub fn with_reporter(config: FilterConfig, reporter: R) -> Self {
        Self {
            state: config.initial_state,
            config,
            steps: 0,
            reporter,
        }
    }

    /// Process one measurement: update, then predict.
    ///
    /// On error the filter state and step counter are left unchanged.
    pub fn step(&mut self, measurement: &Gaussian) -> Result<StepRecord, FilterError> {
        let step = self.steps;
        let initial = self.state;
        self.reporter.on_step_start(step, &initial);

        let updated = match update_measurement(&initial, measurement) {
            Ok(g) => g,
            Err(e) => {
                self.reporter.on_rejected(step, &e);
                return Err(e);
            }
        };
        self.reporter.on_update(step, measurement, &updated);

        let predicted = match predict_state(&updated, &self.config.motion) {
            Ok(g) => g,
            Err(e) => {
                self.reporter.on_rejected(step, &e);
                return Err(e);
            }
        };
        self.reporter.on_prediction(step, &predicted);

        let record = StepRecord::new(step, initial, *measurement, updated, predicted);
        self.state = predicted;
        self.steps += 1;
        self.reporter.on_step_complete(&record);
        Ok(record)
    }

    /// Process a raw `(mean, variance)` pair.
    ///
    /// Invalid pairs are rejected with [`FilterError::InvalidDistribution`]
    /// and reported like any other rejected step.
    pub fn step_raw(&mut self, mean: f64, variance: f64) -> Result<StepRecord, FilterError> {
        match Gaussian::new(mean, variance) {
            Ok(measurement) => self.step(&measurement),
            Err(e) => {
                self.reporter.on_rejected(self.steps, &e);
                Err(e)
            }
        }
    }

    /// Run every measurement in order, stopping at the first error.
    pub fn run<'a, I>(&mut self, measurements: I) -> Result<Vec<StepRecord>, FilterError>
    where
        I: IntoIterator<Item = &'a Gaussian>,
    {
        measurements.into_iter().map(|z| self.step(z)).collect()
    }

    /// Current belief
    #[inline]
    pub fn state(&self) -> &Gaussian {
        &self.state
    }

    /// Configuration the filter was built with
    #[inline]
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Number of completed steps since construction or the last reset
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Reporter receiving transition callbacks
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Consume the filter and return its reporter
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Restore the configured initial belief
    pub fn reset(&mut self) {
        self.state = self.config.initial_state;
        self.steps = 0;
        self.reporter.on_reset(&self.state);
    }
}
