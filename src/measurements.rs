//! Measurement input for the driving loop.
//!
//! Measurements arrive as a stream of whitespace-separated numbers, read two
//! at a time as `mean variance`. Line breaks carry no meaning, so
//! `5 4 6 4` and `5 4\n6 4\n` describe the same two measurements.
//!
//! The reader never hands garbage to the filter: it stops at end of input, at
//! the first token that is not a number, or when a mean has no variance
//! after it. Stopping is logged at WARN level unless the input simply ran
//! out. The values are not validated here; a non-positive variance is passed
//! through so that the filter can reject it as an invalid distribution.

use std::collections::VecDeque;
use std::io::BufRead;

/// Raw `(mean, variance)` pair as read from the input
pub type RawMeasurement = (f64, f64);

/// Why a [`MeasurementReader`] stopped
#[derive(Debug, Clone, PartialEq)]
pub enum StopReason {
    /// Input exhausted cleanly
    EndOfInput,
    /// A token could not be parsed as a number
    Malformed {
        /// The offending token
        token: String,
    },
    /// Input ended after a mean without its variance
    DanglingMean,
    /// The underlying reader failed
    Io {
        /// Error description
        description: String,
    },
}

/// Iterator over `(mean, variance)` pairs read from a [`BufRead`]
pub struct MeasurementReader<R: BufRead> {
    input: R,
    tokens: VecDeque<String>,
    line: String,
    stop: Option<StopReason>,
}

impl<R: BufRead> MeasurementReader<R> {
    /// Wrap a buffered reader
    pub fn new(input: R) -> Self {
        Self {
            input,
            tokens: VecDeque::new(),
            line: String::new(),
            stop: None,
        }
    }

    /// Reason the reader stopped, once it has
    pub fn stop_reason(&self) -> Option<&StopReason> {
        self.stop.as_ref()
    }

    fn next_token(&mut self) -> Result<Option<String>, StopReason> {
        while self.tokens.is_empty() {
            self.line.clear();
            let read = self.input.read_line(&mut self.line).map_err(|e| StopReason::Io {
                description: e.to_string(),
            })?;
            if read == 0 {
                return Ok(None);
            }
            self.tokens
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
        Ok(self.tokens.pop_front())
    }

    fn next_number(&mut self) -> Result<Option<f64>, StopReason> {
        match self.next_token()? {
            None => Ok(None),
            Some(token) => token
                .parse::<f64>()
                .map(Some)
                .map_err(|_| StopReason::Malformed { token }),
        }
    }

    fn halt(&mut self, reason: StopReason) {
        match &reason {
            StopReason::EndOfInput => log::debug!("Measurement input exhausted"),
            StopReason::Malformed { token } => {
                log::warn!("Stopping at malformed measurement token {:?}", token)
            }
            StopReason::DanglingMean => log::warn!("Stopping at mean without variance"),
            StopReason::Io { description } => {
                log::warn!("Stopping on read error: {}", description)
            }
        }
        self.stop = Some(reason);
    }
}

impl<R: BufRead> Iterator for MeasurementReader<R> {
    type Item = RawMeasurement;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stop.is_some() {
            return None;
        }

        let mean = match self.next_number() {
            Ok(Some(m)) => m,
            Ok(None) => {
                self.halt(StopReason::EndOfInput);
                return None;
            }
            Err(reason) => {
                self.halt(reason);
                return None;
            }
        };

        match self.next_number() {
            Ok(Some(variance)) => Some((mean, variance)),
            Ok(None) => {
                self.halt(StopReason::DanglingMean);
                None
            }
            Err(reason) => {
                self.halt(reason);
                None
            }
        }
    }
}

/// Read all measurements from an in-memory string
pub fn parse_measurements(input: &str) -> Vec<RawMeasurement> {
    MeasurementReader::new(input.as_bytes()).collect()
}
