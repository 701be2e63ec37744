//! Core algorithmic components
//!
//! The two pure transitions of the scalar filter:
//!
//! - [`update`] - Measurement update (Gaussian fusion)
//! - [`prediction`] - Motion prediction (Gaussian convolution)

pub mod prediction;
pub mod update;

pub use prediction::{predict_state, predict_steps};
pub use update::{update_measurement, update_measurements};
