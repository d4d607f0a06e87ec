//! Density command implementation
//!
//! Evaluates one of the theoretical densities at a point.

use clap::ValueEnum;
use sampdist_core::densities::{ChiSquared, Density, StandardNormal, StudentT};
use serde::Serialize;

use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Density families the CLI can evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DensityKind {
    /// Standard normal N(0, 1)
    Normal,
    /// Student's t with n − 1 degrees of freedom
    T,
    /// Chi-squared with n − 1 degrees of freedom
    ChiSquare,
}

#[derive(Debug, Serialize)]
struct Evaluation {
    kind: DensityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    n: Option<usize>,
    x: f64,
    pdf: f64,
}

/// Evaluate the density of `kind` at `x`.
///
/// `n` is the sample size; the t and chi-squared densities need it and
/// the normal density ignores it.
pub fn evaluate(kind: DensityKind, n: Option<usize>, x: f64) -> Result<f64> {
    let require_n = || {
        n.ok_or_else(|| CliError::InvalidArgument(format!("--n is required for {:?}", kind)))
    };
    let pdf = match kind {
        DensityKind::Normal => StandardNormal.pdf(x),
        DensityKind::T => StudentT::from_sample_size(require_n()?)?.pdf(x),
        DensityKind::ChiSquare => ChiSquared::from_sample_size(require_n()?)?.pdf(x),
    };
    Ok(pdf)
}

/// Run the density command
pub fn run(kind: DensityKind, n: Option<usize>, x: f64, config: &CliConfig) -> Result<()> {
    let pdf = evaluate(kind, n, x)?;
    println!("{}", render(kind, n, x, pdf, config.format)?);
    Ok(())
}

fn render(
    kind: DensityKind,
    n: Option<usize>,
    x: f64,
    pdf: f64,
    format: OutputFormat,
) -> Result<String> {
    let n = match kind {
        DensityKind::Normal => None,
        _ => n,
    };
    match format {
        OutputFormat::Json => {
            let evaluation = Evaluation { kind, n, x, pdf };
            Ok(serde_json::to_string_pretty(&evaluation)?)
        }
        OutputFormat::Table => Ok(match n {
            Some(n) => format!("{:?} (n = {}) density at x = {}: {}", kind, n, x, pdf),
            None => format!("{:?} density at x = {}: {}", kind, x, pdf),
        }),
    }
}
