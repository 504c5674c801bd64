//! Reader for recorded descent profiles.
//!
//! A profile is plain text with one sample per line: time, altitude, actual descent
//! rate and target descent rate, separated by whitespace. Blank lines and anything
//! after a `#` are ignored.
use std::num::ParseFloatError;
use std::path::Path;

use thiserror::Error;

/// One line of a descent profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescentSample {
    /// Seconds since the start of the recording.
    pub time: f64,
    /// Height above the surface in m.
    pub altitude: f64,
    /// Measured descent rate in m/s.
    pub actual_rate: f64,
    /// Rate the autopilot was aiming for in m/s.
    pub target_rate: f64,
}

impl DescentSample {
    /// Actual minus target rate.
    pub fn rate_error(&self) -> f64 {
        self.actual_rate - self.target_rate
    }
}

/// Problems reading a descent profile. Line numbers start at 1.
#[derive(Debug, Error)]
pub enum DescentLogError {
    #[error("failed to read descent log: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected 4 columns, found {found}")]
    BadColumnCount { line: usize, found: usize },

    #[error("line {line}: {source}")]
    BadNumber {
        line: usize,
        #[source]
        source: ParseFloatError,
    },
}

/// Parses a whole profile held in memory.
pub fn parse_descent_log(text: &str) -> Result<Vec<DescentSample>, DescentLogError> {
    let mut samples = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = match raw.split_once('#') {
            Some((before, _comment)) => before,
            None => raw,
        };
        let fields: Vec<&str> = content.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let [time, altitude, actual_rate, target_rate] = fields.as_slice() else {
            return Err(DescentLogError::BadColumnCount {
                line,
                found: fields.len(),
            });
        };

        samples.push(DescentSample {
            time: number(time, line)?,
            altitude: number(altitude, line)?,
            actual_rate: number(actual_rate, line)?,
            target_rate: number(target_rate, line)?,
        });
    }

    Ok(samples)
}

fn number(field: &str, line: usize) -> Result<f64, DescentLogError> {
    field
        .parse()
        .map_err(|source| DescentLogError::BadNumber { line, source })
}

/// Reads and parses the profile at `path`.
pub fn load_descent_log(path: &Path) -> Result<Vec<DescentSample>, DescentLogError> {
    let text = std::fs::read_to_string(path)?;
    parse_descent_log(&text)
}

/// The sample whose actual rate strays furthest from its target.
pub fn worst_rate_error(samples: &[DescentSample]) -> Option<&DescentSample> {
    samples
        .iter()
        .max_by(|a, b| a.rate_error().abs().total_cmp(&b.rate_error().abs()))
}
