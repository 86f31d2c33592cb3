//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings file is not valid JSON
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Settings file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_runner::RegistrationError),

    /// Runner error
    #[error("{0}")]
    Runner(#[from] aoc_runner::RunnerError),
}
