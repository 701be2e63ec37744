//! Seeded random beliefs and the reference scenario
//!
//! Variances are drawn from a bounded range so that precision ratios stay well
//! within f64 resolution; outside it, fusion can round the posterior variance
//! to the smaller input variance.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use scalar_kalman::Gaussian;

/// Number of random cases per property
pub const CASES: usize = 500;

/// Reference scenario: initial belief, measurement, motion
pub fn scenario() -> (Gaussian, Gaussian, Gaussian) {
    (
        gaussian(0.0, 1000.0),
        gaussian(5.0, 4.0),
        gaussian(1.0, 2.0),
    )
}

/// Build a Gaussian known to be valid
pub fn gaussian(mean: f64, variance: f64) -> Gaussian {
    Gaussian::new(mean, variance).expect("fixture Gaussian must be valid")
}

/// Deterministic RNG for property tests
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random belief with mean in [-100, 100) and variance in [0.01, 100)
pub fn random_gaussian<R: Rng>(rng: &mut R) -> Gaussian {
    gaussian(rng.gen_range(-100.0..100.0), rng.gen_range(0.01..100.0))
}
