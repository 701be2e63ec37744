//! Human- and machine-readable rendering of beliefs and step records.
//!
//! Kept apart from [`Gaussian`] so that the value type carries no I/O.

use std::fmt;
use std::io::{self, Write};

use clap::ValueEnum;

use crate::types::{Gaussian, StepRecord};

/// Two-line rendering of a belief:
///
/// ```text
/// Estimated value: <mean>
/// Variance: <variance>
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BeliefDisplay<'a>(pub &'a Gaussian);

impl fmt::Display for BeliefDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Estimated value: {}", self.0.mean())?;
        writeln!(f, "Variance: {}", self.0.variance())
    }
}

/// Output format of the driving loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Step banner followed by the three beliefs
    #[default]
    Text,
    /// One JSON object per step
    Json,
}

/// Write one step in the text layout, followed by a blank line
pub fn write_step_text<W: Write>(out: &mut W, record: &StepRecord) -> io::Result<()> {
    writeln!(out, "------- Step {} -------", record.step)?;
    writeln!(out, "Initial state:")?;
    write!(out, "{}", BeliefDisplay(&record.initial))?;
    writeln!(out, "Measurement updated:")?;
    write!(out, "{}", BeliefDisplay(&record.updated))?;
    writeln!(out, "State predicted:")?;
    write!(out, "{}", BeliefDisplay(&record.predicted))?;
    writeln!(out)
}

/// Write one step as a single JSON line
pub fn write_step_json<W: Write>(out: &mut W, record: &StepRecord) -> io::Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    writeln!(out)
}

/// Write one step in the requested format
pub fn write_step<W: Write>(out: &mut W, record: &StepRecord, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_step_text(out, record),
        OutputFormat::Json => write_step_json(out, record),
    }
}
