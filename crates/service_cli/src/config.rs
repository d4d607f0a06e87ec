//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables,
//! and command-line flags.

use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "SAMPDIST_LOG_LEVEL";
/// Environment variable overriding the output format.
pub const ENV_FORMAT: &str = "SAMPDIST_FORMAT";
/// Environment variable toggling parallel simulation.
pub const ENV_PARALLEL: &str = "SAMPDIST_PARALLEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Invalid boolean for {name}: {value}. Must be one of: true, false, 1, 0")]
    InvalidFlag { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    /// Results go to stdout, so only problems are logged by default.
    #[default]
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

/// How command results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_value_enum")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_value_enum")]
    pub format: OutputFormat,
    /// Run trials across the Rayon thread pool
    pub parallel: bool,
}

/// Case-insensitive TOML values, spelled as on the command line.
fn deserialize_value_enum<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: ValueEnum,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s, true).map_err(serde::de::Error::custom)
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply environment overrides, reading variables through `lookup`.
    ///
    /// Only variables that are set replace the current values.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level, true)
                .map_err(|_| ConfigError::InvalidLogLevel(level))?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format, true)
                .map_err(|_| ConfigError::InvalidFormat(format))?;
        }
        if let Some(parallel) = lookup(ENV_PARALLEL) {
            self.parallel = parse_flag(ENV_PARALLEL, &parallel)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(parallel) = cli.parallel {
            self.parallel = parallel;
        }
    }
}

/// Configuration-related CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Parallel execution override
    pub parallel: Option<bool>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };
    config.apply_env(lookup)?;
    config.merge_with_cli(cli);
    Ok(config)
}
