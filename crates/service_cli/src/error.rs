//! CLI error types

use sampdist_core::SamplingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Simulation error: {0}")]
    Sampling(#[from] SamplingError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}
