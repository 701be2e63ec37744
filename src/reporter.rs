//! Observability for filter execution.
//!
//! This module provides the [`StepReporter`] trait for debugging and research
//! instrumentation. Reporters receive callbacks at key points of each
//! update/predict cycle without polluting the core transitions.
//!
//! # Zero-Cost Abstraction
//!
//! The default [`NoOpReporter`] compiles to zero overhead - all callback
//! methods are empty and will be optimized away by the compiler.
//!
//! # Example
//!
//! ```
//! use scalar_kalman::{DebugReporter, FilterConfig, Gaussian, ScalarKalmanFilter};
//!
//! let mut filter = ScalarKalmanFilter::with_reporter(FilterConfig::default(), DebugReporter::new());
//! filter.step(&Gaussian::new(5.0, 4.0).unwrap()).unwrap();
//!
//! assert_eq!(filter.reporter().update_events().len(), 1);
//! ```

use crate::filter::FilterError;
use crate::types::{Gaussian, StepRecord};

// ============================================================================
// StepReporter Trait
// ============================================================================

/// Observability trait for filter step execution.
///
/// All methods have default empty implementations, so you only need
/// to override the events you care about.
///
/// Reporters use `&mut self` for callbacks, so they are NOT required
/// to be `Send + Sync`.
pub trait StepReporter {
    /// Called before the measurement update with the current belief.
    fn on_step_start(&mut self, _step: usize, _belief: &Gaussian) {}

    /// Called after the measurement has been fused into the belief.
    fn on_update(&mut self, _step: usize, _measurement: &Gaussian, _posterior: &Gaussian) {}

    /// Called after the motion model has been applied.
    fn on_prediction(&mut self, _step: usize, _predicted: &Gaussian) {}

    /// Called once the full cycle has been committed to the filter state.
    fn on_step_complete(&mut self, _record: &StepRecord) {}

    /// Called when a step is rejected. The filter state is left untouched.
    fn on_rejected(&mut self, _step: usize, _error: &FilterError) {}

    /// Called when the filter is reset to its initial belief.
    fn on_reset(&mut self, _belief: &Gaussian) {}
}

// ============================================================================
// NoOpReporter
// ============================================================================

/// Zero-cost reporter that does nothing.
///
/// This is the default reporter used when no observability is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpReporter;

impl NoOpReporter {
    /// Create a new no-op reporter.
    pub fn new() -> Self {
        Self
    }
}

impl StepReporter for NoOpReporter {}

// ============================================================================
// DebugReporter
// ============================================================================

/// Reporter that captures all events for debugging.
///
/// Beliefs are `Copy`, so capturing is cheap, but a long run still keeps
/// one entry per event.
#[derive(Debug, Clone, Default)]
pub struct DebugReporter {
    /// Beliefs at the start of each step (step, belief)
    starts: Vec<(usize, Gaussian)>,

    /// Update events (step, measurement, posterior)
    updates: Vec<(usize, Gaussian, Gaussian)>,

    /// Prediction events (step, predicted)
    predictions: Vec<(usize, Gaussian)>,

    /// Completed step records
    completed: Vec<StepRecord>,

    /// Rejected steps (step, error)
    rejections: Vec<(usize, FilterError)>,

    /// Number of resets observed
    resets: usize,
}

impl DebugReporter {
    /// Create a new debug reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all captured events.
    pub fn clear(&mut self) {
        self.starts.clear();
        self.updates.clear();
        self.predictions.clear();
        self.completed.clear();
        self.rejections.clear();
        self.resets = 0;
    }

    /// Get captured step-start events.
    pub fn start_events(&self) -> &[(usize, Gaussian)] {
        &self.starts
    }

    /// Get captured update events.
    pub fn update_events(&self) -> &[(usize, Gaussian, Gaussian)] {
        &self.updates
    }

    /// Get captured prediction events.
    pub fn prediction_events(&self) -> &[(usize, Gaussian)] {
        &self.predictions
    }

    /// Get completed step records.
    pub fn completed_steps(&self) -> &[StepRecord] {
        &self.completed
    }

    /// Get rejected steps.
    pub fn rejections(&self) -> &[(usize, FilterError)] {
        &self.rejections
    }

    /// Number of resets observed.
    pub fn reset_count(&self) -> usize {
        self.resets
    }

    /// Total number of captured events across all types.
    pub fn total_events(&self) -> usize {
        self.starts.len()
            + self.updates.len()
            + self.predictions.len()
            + self.completed.len()
            + self.rejections.len()
            + self.resets
    }
}

impl StepReporter for DebugReporter {
    fn on_step_start(&mut self, step: usize, belief: &Gaussian) {
        self.starts.push((step, *belief));
    }

    fn on_update(&mut self, step: usize, measurement: &Gaussian, posterior: &Gaussian) {
        self.updates.push((step, *measurement, *posterior));
    }

    fn on_prediction(&mut self, step: usize, predicted: &Gaussian) {
        self.predictions.push((step, *predicted));
    }

    fn on_step_complete(&mut self, record: &StepRecord) {
        self.completed.push(*record);
    }

    fn on_rejected(&mut self, step: usize, error: &FilterError) {
        self.rejections.push((step, error.clone()));
    }

    fn on_reset(&mut self, _belief: &Gaussian) {
        self.resets += 1;
    }
}

// ============================================================================
// LoggingReporter
// ============================================================================

/// Reporter that logs events using the log crate.
///
/// # Log Levels
///
/// - `on_step_complete`: INFO
/// - `on_update`, `on_prediction`, `on_reset`: DEBUG
/// - `on_step_start`: TRACE
/// - `on_rejected`: WARN
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingReporter {
    /// Whether to include the measurement and gain in update messages
    verbose: bool,
}

impl LoggingReporter {
    /// Create a new logging reporter.
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Create a verbose logging reporter.
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl StepReporter for LoggingReporter {
    fn on_step_start(&mut self, step: usize, belief: &Gaussian) {
        log::trace!(
            "Step {} start: mean={:.6}, variance={:.6}",
            step,
            belief.mean(),
            belief.variance()
        );
    }

    fn on_update(&mut self, step: usize, measurement: &Gaussian, posterior: &Gaussian) {
        if self.verbose {
            log::debug!(
                "Step {} update: z=N({:.6}, {:.6}) -> mean={:.6}, variance={:.6}",
                step,
                measurement.mean(),
                measurement.variance(),
                posterior.mean(),
                posterior.variance()
            );
        } else {
            log::debug!(
                "Step {} update: mean={:.6}, variance={:.6}",
                step,
                posterior.mean(),
                posterior.variance()
            );
        }
    }

    fn on_prediction(&mut self, step: usize, predicted: &Gaussian) {
        log::debug!(
            "Step {} prediction: mean={:.6}, variance={:.6}",
            step,
            predicted.mean(),
            predicted.variance()
        );
    }

    fn on_step_complete(&mut self, record: &StepRecord) {
        if self.verbose {
            log::info!(
                "Step {} complete: gain={:.4}, innovation={:.6}, variance {:.6} -> {:.6}",
                record.step,
                record.gain(),
                record.innovation(),
                record.initial.variance(),
                record.predicted.variance()
            );
        } else {
            log::info!("Step {} complete", record.step);
        }
    }

    fn on_rejected(&mut self, step: usize, error: &FilterError) {
        log::warn!("Step {} rejected: {}", step, error);
    }

    fn on_reset(&mut self, belief: &Gaussian) {
        log::debug!(
            "Filter reset: mean={:.6}, variance={:.6}",
            belief.mean(),
            belief.variance()
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
