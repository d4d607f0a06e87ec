//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands render their
//! output to a `String` so the rendering can be tested without a terminal.

pub mod density;
pub mod simulate;
pub mod sweep;

use sampdist_core::{DistributionSpec, SamplingResult};
use sampdist_engine::rng::{SeededFactory, SeededSource};
use sampdist_engine::sim::{SimulationEngine, SimulationResult};

/// Runs one simulation with a freshly seeded source.
pub(crate) fn simulate_once(
    engine: &SimulationEngine,
    spec: DistributionSpec,
    n: usize,
    parallel: bool,
) -> SamplingResult<SimulationResult> {
    if parallel {
        engine.recompute_parallel(spec, n, &SeededFactory::from_entropy())
    } else {
        engine.recompute(spec, n, SeededSource::from_entropy())
    }
}

/// Horizontal rule for box-drawn tables: `left`, then `─` runs joined by `mid`.
pub(crate) fn rule(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(mid);
        }
        line.extend(std::iter::repeat('─').take(width + 2));
    }
    line.push(right);
    line
}

/// One table row with right-aligned cells.
pub(crate) fn row(widths: &[usize], cells: &[String]) -> String {
    let mut line = String::from("│");
    for (width, cell) in widths.iter().zip(cells) {
        line.push_str(&format!(" {:>width$} │", cell, width = width));
    }
    line
}

/// Renders a full box-drawn table.
pub(crate) fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut lines = vec![
        rule(&widths, '┌', '┬', '┐'),
        row(&widths, &headers),
        rule(&widths, '├', '┼', '┤'),
    ];
    lines.extend(rows.iter().map(|r| row(&widths, r)));
    lines.push(rule(&widths, '└', '┴', '┘'));
    lines.join("\n")
}
