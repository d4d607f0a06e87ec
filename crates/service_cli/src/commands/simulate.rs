//! Simulate command implementation
//!
//! Runs one simulation and prints both histograms next to their
//! theoretical densities.

use sampdist_core::histogram::Histogram;
use sampdist_core::DistributionSpec;
use sampdist_engine::sim::{SimulationEngine, SimulationResult};
use serde::Serialize;
use tracing::info;

use super::{simulate_once, table};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// One statistic's histogram with its reference curve.
#[derive(Debug, Serialize)]
struct Panel<'a> {
    statistic: &'static str,
    dof: f64,
    total_variation: f64,
    histogram: &'a Histogram,
    theoretical: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct SimulationReport<'a> {
    distribution: String,
    n: usize,
    t: Panel<'a>,
    chi_square: Panel<'a>,
    t_distance_to_normal: f64,
}

impl<'a> From<&'a SimulationResult> for SimulationReport<'a> {
    fn from(result: &'a SimulationResult) -> Self {
        let pdfs = |overlay: Vec<(f64, f64)>| -> Vec<f64> {
            overlay.into_iter().map(|(_, pdf)| pdf).collect()
        };
        Self {
            distribution: result.spec.to_string(),
            n: result.n,
            t: Panel {
                statistic: "t",
                dof: result.t_density().dof(),
                total_variation: result.t_distance(),
                histogram: &result.t_histogram,
                theoretical: pdfs(result.t_overlay()),
            },
            chi_square: Panel {
                statistic: "chi_square",
                dof: result.chi_square_density().dof(),
                total_variation: result.chi_square_distance(),
                histogram: &result.chi_square_histogram,
                theoretical: pdfs(result.chi_square_overlay()),
            },
            t_distance_to_normal: result.t_distance_to_normal(),
        }
    }
}

/// Run the simulate command
pub fn run(dist: &str, n: usize, config: &CliConfig) -> Result<()> {
    let spec = DistributionSpec::parse(dist);
    info!(%spec, n, parallel = config.parallel, "Starting simulation");

    let engine = SimulationEngine::default();
    let result = simulate_once(&engine, spec, n, config.parallel)?;

    println!("{}", render(&result, config.format)?);
    Ok(())
}

/// Render a simulation result in the requested format
pub fn render(result: &SimulationResult, format: OutputFormat) -> Result<String> {
    let report = SimulationReport::from(result);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => Ok(render_table(&report)),
    }
}

fn render_panel(title: &str, panel: &Panel<'_>) -> String {
    let rows: Vec<Vec<String>> = panel
        .histogram
        .bins()
        .iter()
        .zip(&panel.theoretical)
        .map(|(bin, pdf)| {
            vec![
                format!("{:.4}", bin.center),
                bin.count.to_string(),
                format!("{:.5}", bin.density),
                format!("{:.5}", pdf),
            ]
        })
        .collect();

    format!(
        "{} ({} dof), TV distance {:.4}\n{}",
        title,
        panel.dof,
        panel.total_variation,
        table(&["Bin centre", "Count", "Empirical", "Theoretical"], &rows)
    )
}

fn render_table(report: &SimulationReport<'_>) -> String {
    [
        format!("Population {}, sample size n = {}", report.distribution, report.n),
        render_panel("t-statistic vs Student's t", &report.t),
        format!(
            "TV distance of t-statistic to N(0,1): {:.4}",
            report.t_distance_to_normal
        ),
        render_panel("Chi-squared statistic vs chi-squared", &report.chi_square),
    ]
    .join("\n\n")
}
