//! Sampdist CLI - Sampling Distributions of the Mean and Variance
//!
//! Simulates the t and chi-squared statistics of repeated normal samples
//! and compares their histograms with the theoretical densities.
//!
//! # Commands
//!
//! - `sampdist simulate --dist "N(0,1)" -n 10` - One simulation with overlays
//! - `sampdist sweep --from 3 --to 50` - Distance to theory across sample sizes
//! - `sampdist density --kind t -n 10 --x 1.5` - Evaluate a density
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires configuration and
//! logging around the `sampdist_engine` and `sampdist_core` crates.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::density::DensityKind;
use config::{build_config, CliArgs, LogLevel, OutputFormat};

/// Sampling-distribution simulator
#[derive(Parser)]
#[command(name = "sampdist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, value_enum, ignore_case = true)]
    log_level: Option<LogLevel>,

    /// Output format
    #[arg(short, long, global = true, value_enum, ignore_case = true)]
    format: Option<OutputFormat>,

    /// Run trials across all cores
    #[arg(long, global = true, conflicts_with = "sequential")]
    parallel: bool,

    /// Run trials on the current thread
    #[arg(long, global = true)]
    sequential: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let parallel = match (self.parallel, self.sequential) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level,
            format: self.format,
            parallel,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate the t and chi-squared statistics for one sample size
    Simulate {
        /// Population, written as N(mean,variance)
        #[arg(short, long, default_value = "N(0,1)")]
        dist: String,

        /// Sample size per trial (at least 2)
        #[arg(short)]
        n: usize,
    },

    /// Recompute across a range of sample sizes
    Sweep {
        /// Population, written as N(mean,variance)
        #[arg(short, long, default_value = "N(0,1)")]
        dist: String,

        /// First sample size
        #[arg(long, default_value = "3")]
        from: usize,

        /// Last sample size
        #[arg(long, default_value = "50")]
        to: usize,

        /// Increment between sample sizes
        #[arg(long, default_value = "1")]
        step: usize,
    },

    /// Evaluate a theoretical density at a point
    Density {
        /// Density family
        #[arg(short, long, value_enum)]
        kind: DensityKind,

        /// Sample size (t and chi-square only)
        #[arg(short)]
        n: Option<usize>,

        /// Point of evaluation
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
    },
}

fn init_tracing(level: LevelFilter) {
    // RUST_LOG takes precedence over the configured level
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args()).context("Failed to load configuration")?;

    init_tracing(config.log_level.into());
    tracing::debug!(
        log_level = ?config.log_level,
        format = ?config.format,
        parallel = config.parallel,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Simulate { dist, n } => {
            commands::simulate::run(&dist, n, &config).context("simulate failed")?
        }
        Commands::Sweep {
            dist,
            from,
            to,
            step,
        } => commands::sweep::run(&dist, from, to, step, &config).context("sweep failed")?,
        Commands::Density { kind, n, x } => {
            commands::density::run(kind, n, x, &config).context("density failed")?
        }
    }
    Ok(())
}
