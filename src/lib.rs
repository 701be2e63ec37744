/*!
# scalar-kalman - One-dimensional Kalman filtering

Recursive Bayesian estimation of a hidden scalar from noisy measurements.
Belief is a Gaussian (mean, variance) refined by alternating a measurement
update (fusion of two Gaussians) and a motion prediction (sum of two
independent Gaussians).

## Modules

- [`types`] - Validated [`Gaussian`] belief and per-step records
- [`components`] - The two pure transitions: update and prediction
- [`filter`] - Stateful driver and error types
- [`config`] - Initial belief and motion model, JSON-loadable
- [`measurements`] - Reading `mean variance` pairs from a stream
- [`format`] - Text and JSON rendering of beliefs
- [`reporter`] - Observability hooks
- [`simulation`] - Seeded synthetic measurement streams
- [`angle`] - Angle wrapping helpers

## Example

```rust
use scalar_kalman::{predict_state, update_measurement, Gaussian};

let prior = Gaussian::new(0.0, 1000.0)?;
let measurement = Gaussian::new(5.0, 4.0)?;
let motion = Gaussian::new(1.0, 2.0)?;

let posterior = update_measurement(&prior, &measurement)?;
let predicted = predict_state(&posterior, &motion)?;

assert!((posterior.mean() - 4.9800797).abs() < 1e-5);
assert!((predicted.variance() - 5.9840637).abs() < 1e-5);
# Ok::<(), scalar_kalman::FilterError>(())
```
*/

pub mod angle;
pub mod components;
pub mod config;
pub mod filter;
pub mod format;
pub mod measurements;
pub mod reporter;
pub mod simulation;
pub mod types;

// Core types
pub use types::{Gaussian, StepRecord, INITIAL_VARIANCE};

// Transitions
pub use components::{predict_state, predict_steps, update_measurement, update_measurements};

// Errors
pub use filter::FilterError;

// Driver
pub use config::FilterConfig;
pub use filter::ScalarKalmanFilter;

// Reporters
pub use reporter::{DebugReporter, LoggingReporter, NoOpReporter, StepReporter};

// I/O adapters
pub use format::{BeliefDisplay, OutputFormat};
pub use measurements::MeasurementReader;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
