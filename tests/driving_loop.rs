//! End-to-end tests for the driving loop
//!
//! Covers the library driver fed by the measurement reader, the text
//! layout, simulated runs, and the `scalar-kalman` binary itself.

mod helpers;

use std::io::Write;
use std::process::{Command, Stdio};

use helpers::assertions::{assert_gaussian_close, assert_scalar_close};
use helpers::fixtures::{gaussian, scenario};

use scalar_kalman::format::{write_step_text, BeliefDisplay};
use scalar_kalman::simulation::{simulate, SimulationConfig};
use scalar_kalman::{
    DebugReporter, FilterConfig, FilterError, MeasurementReader, ScalarKalmanFilter, StepRecord,
};

fn scenario_config() -> FilterConfig {
    let (initial, _, motion) = scenario();
    FilterConfig::new(initial, motion)
}

/// Feed text input through the reader and filter, collecting records
fn run_text(config: FilterConfig, input: &str) -> Result<Vec<StepRecord>, FilterError> {
    let mut filter = ScalarKalmanFilter::new(config);
    MeasurementReader::new(input.as_bytes())
        .map(|(mean, variance)| filter.step_raw(mean, variance))
        .collect()
}

/// Extract the numbers following `Estimated value:` / `Variance:` labels
fn labelled_values(text: &str, label: &str) -> Vec<f64> {
    text.lines()
        .filter_map(|line| line.strip_prefix(label))
        .map(|v| v.trim().parse::<f64>().expect("numeric value"))
        .collect()
}

// =============================================================================
// Library driver
// =============================================================================

#[test]
fn test_reader_to_filter_scenario() {
    let records = run_text(scenario_config(), "5 4\n").unwrap();
    assert_eq!(records.len(), 1);
    assert_gaussian_close(&records[0].updated, 4.980_079_7, 3.984_063_7, 1e-5, "updated");
    assert_gaussian_close(&records[0].predicted, 5.980_079_7, 5.984_063_7, 1e-5, "predicted");
}

#[test]
fn test_malformed_input_stops_cleanly() {
    let records = run_text(scenario_config(), "5 4\n6 4\nnot-a-number 4\n7 4\n").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].initial, records[0].predicted);
}

#[test]
fn test_non_positive_variance_aborts_run() {
    let err = run_text(scenario_config(), "5 4\n6 0\n7 4\n").unwrap_err();
    assert!(err.is_invalid_distribution());
}

#[test]
fn test_constant_signal_converges() {
    // Small process noise: the variance settles near sqrt(q) and the estimate
    // locks onto the constant signal.
    let config = FilterConfig::default().with_motion(gaussian(0.0, 0.01));
    let mut filter = ScalarKalmanFilter::with_reporter(config, DebugReporter::new());
    let zs = vec![gaussian(10.0, 1.0); 200];
    let records = filter.run(&zs).unwrap();

    let last = records.last().unwrap();
    assert_scalar_close(last.updated.mean(), 10.0, 1e-6, "converged mean");
    assert!(last.updated.variance() < 0.2);
    assert!(last.gain() < 0.2);
    assert_eq!(filter.reporter().completed_steps().len(), 200);
}

#[test]
fn test_simulated_run_tracks_truth() {
    let sim = simulate(&SimulationConfig {
        steps: 500,
        seed: 7,
        initial_value: 0.0,
        motion: gaussian(0.0, 0.25),
        measurement_variance: 4.0,
    })
    .unwrap();

    let config = FilterConfig::default().with_motion(gaussian(0.0, 0.25));
    let mut filter = ScalarKalmanFilter::new(config);
    let records = filter.run(&sim.measurements).unwrap();

    // Compare mean squared error of the filter to that of raw measurements,
    // skipping the first steps while the prior washes out.
    let skip = 20;
    let filtered_mse: f64 = records[skip..]
        .iter()
        .zip(&sim.truth[skip..])
        .map(|(r, x)| (r.updated.mean() - x).powi(2))
        .sum::<f64>()
        / (records.len() - skip) as f64;
    let raw_mse: f64 = sim.measurements[skip..]
        .iter()
        .zip(&sim.truth[skip..])
        .map(|(z, x)| (z.mean() - x).powi(2))
        .sum::<f64>()
        / (records.len() - skip) as f64;

    assert!(
        filtered_mse < raw_mse,
        "filtered MSE {} not below raw MSE {}",
        filtered_mse,
        raw_mse
    );
}

// =============================================================================
// Text layout
// =============================================================================

#[test]
fn test_text_layout_per_step() {
    let records = run_text(scenario_config(), "5 4 6 4").unwrap();
    let mut buf = Vec::new();
    for r in &records {
        write_step_text(&mut buf, r).unwrap();
    }
    let text = String::from_utf8(buf).unwrap();

    assert_eq!(text.matches("------- Step").count(), 2);
    assert!(text.starts_with("------- Step 0 -------\nInitial state:\n"));
    assert!(text.contains(&format!("Measurement updated:\n{}", BeliefDisplay(&records[0].updated))));
    assert!(text.contains(&format!("State predicted:\n{}\n", BeliefDisplay(&records[1].predicted))));

    let means = labelled_values(&text, "Estimated value:");
    assert_eq!(means.len(), 6);
    assert_eq!(means[0], 0.0);
    assert_scalar_close(means[2], 5.980_079_7, 1e-5, "first predicted mean");
}

// =============================================================================
// Binary
// =============================================================================

fn run_binary(args: &[&str], stdin: &str) -> (bool, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_scalar-kalman"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn scalar-kalman");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");

    let output = child.wait_with_output().expect("wait");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn test_binary_scenario_text() {
    let (ok, stdout, _) = run_binary(&["--motion-mean", "1", "--motion-variance", "2"], "5 4\n");
    assert!(ok);

    let means = labelled_values(&stdout, "Estimated value:");
    let variances = labelled_values(&stdout, "Variance:");
    assert_eq!(means.len(), 3);
    assert_eq!(variances[0], 1000.0);
    assert_scalar_close(means[1], 4.980_079_7, 1e-5, "updated mean");
    assert_scalar_close(variances[1], 3.984_063_7, 1e-5, "updated variance");
    assert_scalar_close(means[2], 5.980_079_7, 1e-5, "predicted mean");
    assert_scalar_close(variances[2], 5.984_063_7, 1e-5, "predicted variance");
}

#[test]
fn test_binary_json_lines() {
    let (ok, stdout, _) = run_binary(&["--format", "json"], "5 4\n6 4\n");
    assert!(ok);

    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["step"], 1);
    assert_eq!(second["measurement"]["mean"], 6.0);
}

#[test]
fn test_binary_rejects_invalid_measurement() {
    let (ok, stdout, stderr) = run_binary(&[], "5 4\n5 -1\n");
    assert!(!ok);
    assert!(stdout.contains("------- Step 0 -------"));
    assert!(!stdout.contains("------- Step 1 -------"));
    assert!(stderr.contains("Invalid distribution"));
}

#[test]
fn test_binary_rejects_invalid_override() {
    for args in [
        ["--motion-variance", "0"],
        ["--motion-variance", "-1"],
        ["--initial-variance", "-2.5"],
    ] {
        let (ok, stdout, stderr) = run_binary(&args, "5 4\n");
        assert!(!ok, "{:?} accepted", args);
        assert!(stdout.is_empty(), "{:?} produced output", args);
        assert!(stderr.contains("Invalid distribution"), "{:?}: {}", args, stderr);
    }
}

#[test]
fn test_binary_rejects_negative_simulation_noise() {
    let (ok, _, stderr) = run_binary(&["--simulate", "3", "--measurement-variance", "-4"], "");
    assert!(!ok);
    assert!(stderr.contains("Invalid distribution"), "{}", stderr);
}
