//! Driving loop for the scalar filter
//!
//! Reads `mean variance` measurement pairs from a file or stdin (or simulates
//! them), runs update then predict for each one, and prints the belief before
//! and after each transition.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use scalar_kalman::format::write_step;
use scalar_kalman::simulation::{simulate, SimulationConfig};
use scalar_kalman::{
    FilterConfig, FilterError, Gaussian, LoggingReporter, MeasurementReader, OutputFormat,
    ScalarKalmanFilter,
};

// =============================================================================
// CLI Arguments
// =============================================================================

#[derive(Parser, Debug)]
#[command(name = "scalar-kalman", author, version, about, long_about = None)]
struct Args {
    /// JSON file with `initial_state` and `motion` Gaussians
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Measurement file (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Override the initial mean
    #[arg(long, allow_negative_numbers = true)]
    initial_mean: Option<f64>,

    /// Override the initial variance
    #[arg(long, allow_negative_numbers = true)]
    initial_variance: Option<f64>,

    /// Override the motion mean
    #[arg(long, allow_negative_numbers = true)]
    motion_mean: Option<f64>,

    /// Override the motion variance
    #[arg(long, allow_negative_numbers = true)]
    motion_variance: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Simulate this many measurements instead of reading input
    #[arg(long)]
    simulate: Option<usize>,

    /// Random seed for simulation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Measurement noise variance for simulation
    #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
    measurement_variance: f64,

    /// Log every transition at debug level
    #[arg(short, long)]
    verbose: bool,
}

// =============================================================================
// Setup
// =============================================================================

fn override_gaussian(base: Gaussian, mean: Option<f64>, variance: Option<f64>) -> Result<Gaussian, FilterError> {
    if mean.is_none() && variance.is_none() {
        return Ok(base);
    }
    Gaussian::new(
        mean.unwrap_or(base.mean()),
        variance.unwrap_or(base.variance()),
    )
}

fn build_config(args: &Args) -> Result<FilterConfig, FilterError> {
    let base = match &args.config {
        Some(path) => FilterConfig::from_json_file(path)?,
        None => FilterConfig::default(),
    };
    let initial = override_gaussian(base.initial_state, args.initial_mean, args.initial_variance)?;
    let motion = override_gaussian(base.motion, args.motion_mean, args.motion_variance)?;
    Ok(FilterConfig::new(initial, motion))
}

fn open_input(path: &Option<PathBuf>) -> io::Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(p) => Box::new(BufReader::new(File::open(p)?)),
        None => Box::new(io::stdin().lock()),
    })
}

// =============================================================================
// Main loop
// =============================================================================

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(args)?;
    log::info!(
        "Initial state N({}, {}), motion N({}, {})",
        config.initial_state.mean(),
        config.initial_state.variance(),
        config.motion.mean(),
        config.motion.variance()
    );

    let reporter = if args.verbose {
        LoggingReporter::verbose()
    } else {
        LoggingReporter::new()
    };
    let mut filter = ScalarKalmanFilter::with_reporter(config, reporter);
    let mut out = BufWriter::new(io::stdout().lock());

    if let Some(steps) = args.simulate {
        let sim = simulate(&SimulationConfig {
            steps,
            seed: args.seed,
            initial_value: config.initial_state.mean(),
            motion: config.motion,
            measurement_variance: args.measurement_variance,
        })?;
        for (z, truth) in sim.measurements.iter().zip(&sim.truth) {
            let record = filter.step(z)?;
            log::debug!("Step {} truth={:.6}", record.step, truth);
            write_step(&mut out, &record, args.format)?;
        }
    } else {
        let input = open_input(&args.input)?;
        for (mean, variance) in MeasurementReader::new(input) {
            let record = filter.step_raw(mean, variance)?;
            write_step(&mut out, &record, args.format)?;
        }
    }

    out.flush()?;
    log::info!("Processed {} measurements", filter.steps());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
