//! Error types for the command-line tool.
use marslander_physics::SimulationError;
use thiserror::Error;

use crate::descent::DescentLogError;

/// Errors that can occur when loading, saving, or checking a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// Printing every 0th sample makes no sense.
    #[error("output interval must be at least 1")]
    ZeroInterval,

    /// `log_level` is not a tracing filter.
    #[error("invalid log level '{level}': {source}")]
    BadLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Anything that stops the program.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error(transparent)]
    Descent(#[from] DescentLogError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
