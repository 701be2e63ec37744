//! Filter driver and error types
//!
//! - [`ScalarKalmanFilter`] - Sequences update and prediction over a measurement stream
//! - [`FilterError`] - Errors raised by the core and its configuration layer

pub mod errors;
pub mod scalar;

pub use errors::FilterError;
pub use scalar::ScalarKalmanFilter;
