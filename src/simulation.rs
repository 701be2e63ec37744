//! Simulated measurement streams
//!
//! Generates a random-walk ground truth and noisy observations of it, for
//! demos, tests and benchmarks. Runs are reproducible from the seed.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::filter::FilterError;
use crate::types::Gaussian;

/// Parameters of a simulated run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Number of measurements to generate
    pub steps: usize,
    /// RNG seed
    pub seed: u64,
    /// True value before the first step
    pub initial_value: f64,
    /// Per-step displacement of the true value
    pub motion: Gaussian,
    /// Variance of the measurement noise
    pub measurement_variance: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            seed: 42,
            initial_value: 0.0,
            motion: Gaussian::default_prior(),
            measurement_variance: 4.0,
        }
    }
}

/// Ground truth and the measurements generated from it
#[derive(Debug, Clone)]
pub struct Simulation {
    /// True value at each measurement
    pub truth: Vec<f64>,
    /// Noisy measurements, each carrying the measurement variance
    pub measurements: Vec<Gaussian>,
}

/// Generate a simulated run
///
/// Measurement `k` observes the truth at step `k`; the truth then moves by a
/// draw from the motion model, matching the update-then-predict cycle.
pub fn simulate(config: &SimulationConfig) -> Result<Simulation, FilterError> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let noise = normal(0.0, config.measurement_variance)?;
    let step = normal(config.motion.mean(), config.motion.variance())?;

    let mut truth = Vec::with_capacity(config.steps);
    let mut measurements = Vec::with_capacity(config.steps);
    let mut x = config.initial_value;

    for _ in 0..config.steps {
        truth.push(x);
        measurements.push(Gaussian::new(
            x + noise.sample(&mut rng),
            config.measurement_variance,
        )?);
        x += step.sample(&mut rng);
    }

    Ok(Simulation {
        truth,
        measurements,
    })
}

fn normal(mean: f64, variance: f64) -> Result<Normal<f64>, FilterError> {
    // Validates the variance before taking its square root
    let g = Gaussian::new(mean, variance)?;
    Normal::new(g.mean(), g.std_dev()).map_err(|_| FilterError::invalid_distribution(mean, variance))
}
