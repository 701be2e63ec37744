//! Core types for scalar filtering
//!
//! - [`Gaussian`] - Validated (mean, variance) belief
//! - [`StepRecord`] - Beliefs captured across one update/predict cycle

mod gaussian;
mod output;

pub use gaussian::{Gaussian, INITIAL_VARIANCE};
pub use output::StepRecord;
