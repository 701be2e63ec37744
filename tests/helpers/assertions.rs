//! Generic assertion functions for numerical comparisons with tolerance

use scalar_kalman::Gaussian;

/// Compare scalar values with tolerance
pub fn assert_scalar_close(actual: f64, expected: f64, tolerance: f64, field_name: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {}, got {} (diff: {}, tolerance: {})",
        field_name,
        expected,
        actual,
        diff,
        tolerance
    );
}

/// Compare both moments of a belief with tolerance
pub fn assert_gaussian_close(actual: &Gaussian, expected_mean: f64, expected_variance: f64, tolerance: f64, label: &str) {
    assert_scalar_close(actual.mean(), expected_mean, tolerance, &format!("{} mean", label));
    assert_scalar_close(
        actual.variance(),
        expected_variance,
        tolerance,
        &format!("{} variance", label),
    );
}
