//! Sweep command implementation
//!
//! Steps the sample size through a range, recomputing for each value the
//! way an animation would, and reports how far each histogram is from its
//! theoretical density.

use sampdist_core::{DistributionSpec, SamplingResult};
use sampdist_engine::sim::{RecomputeSession, SimulationEngine, SimulationResult};
use serde::Serialize;
use tracing::{debug, info};

use super::{simulate_once, table};
use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Distances for one sample size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub n: usize,
    pub t_distance: f64,
    pub t_distance_to_normal: f64,
    pub chi_square_distance: f64,
}

impl From<&SimulationResult> for SweepPoint {
    fn from(result: &SimulationResult) -> Self {
        Self {
            n: result.n,
            t_distance: result.t_distance(),
            t_distance_to_normal: result.t_distance_to_normal(),
            chi_square_distance: result.chi_square_distance(),
        }
    }
}

/// Sample sizes `from, from + step, ..., <= to`.
pub fn sample_sizes(from: usize, to: usize, step: usize) -> Result<Vec<usize>> {
    if from < 2 {
        return Err(CliError::InvalidArgument(format!(
            "--from must be at least 2, got {}",
            from
        )));
    }
    if to < from {
        return Err(CliError::InvalidArgument(format!(
            "--to ({}) must not be below --from ({})",
            to, from
        )));
    }
    if step == 0 {
        return Err(CliError::InvalidArgument(
            "--step must be positive".to_string(),
        ));
    }
    Ok((from..=to).step_by(step).collect())
}

/// Recompute for every size, surfacing each result through `session`.
///
/// `compute` runs one simulation; results superseded before they finish
/// are skipped.
pub fn sweep<F>(
    engine: &SimulationEngine,
    session: &RecomputeSession,
    spec: DistributionSpec,
    sizes: &[usize],
    mut compute: F,
) -> Result<Vec<SweepPoint>>
where
    F: FnMut(&SimulationEngine, DistributionSpec, usize) -> SamplingResult<SimulationResult>,
{
    let mut points = Vec::with_capacity(sizes.len());
    for &n in sizes {
        let ticket = session.begin();
        let result = compute(engine, spec, n)?;
        if let Some(published) = session.publish(ticket, result) {
            let point = SweepPoint::from(published.as_ref());
            debug!(n, t_distance = point.t_distance, "Sweep step complete");
            points.push(point);
        }
    }
    Ok(points)
}

/// Run the sweep command
pub fn run(dist: &str, from: usize, to: usize, step: usize, config: &CliConfig) -> Result<()> {
    let spec = DistributionSpec::parse(dist);
    let sizes = sample_sizes(from, to, step)?;
    info!(%spec, from, to, step, "Starting sweep");

    let engine = SimulationEngine::default();
    let session = RecomputeSession::new();
    let parallel = config.parallel;
    let points = sweep(&engine, &session, spec, &sizes, |engine, spec, n| {
        simulate_once(engine, spec, n, parallel)
    })?;

    println!("{}", render(spec, &points, config.format)?);
    Ok(())
}

/// Render sweep results in the requested format
pub fn render(
    spec: DistributionSpec,
    points: &[SweepPoint],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(points)?),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = points
                .iter()
                .map(|p| {
                    vec![
                        p.n.to_string(),
                        format!("{:.4}", p.t_distance),
                        format!("{:.4}", p.t_distance_to_normal),
                        format!("{:.4}", p.chi_square_distance),
                    ]
                })
                .collect();
            Ok(format!(
                "Population {}, total variation distance by sample size\n{}",
                spec,
                table(&["n", "t vs Student", "t vs N(0,1)", "chi2 vs chi2"], &rows)
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sampdist_engine::rng::SeededSource;
    use sampdist_engine::sim::SimulationConfig;

    fn engine() -> SimulationEngine {
        SimulationEngine::new(
            SimulationConfig::builder()
                .simulation_count(5_000)
                .build()
                .unwrap(),
        )
    }

    fn seeded(
        engine: &SimulationEngine,
        spec: DistributionSpec,
        n: usize,
    ) -> SamplingResult<SimulationResult> {
        engine.recompute(spec, n, SeededSource::from_seed(n as u64))
    }

    #[test]
    fn test_sample_sizes() {
        assert_eq!(sample_sizes(3, 7, 1).unwrap(), vec![3, 4, 5, 6, 7]);
        assert_eq!(sample_sizes(3, 50, 20).unwrap(), vec![3, 23, 43]);
        assert_eq!(sample_sizes(5, 5, 3).unwrap(), vec![5]);
    }

    #[test]
    fn test_sample_sizes_rejects_bad_ranges() {
        assert!(matches!(sample_sizes(1, 5, 1), Err(CliError::InvalidArgument(_))));
        assert!(matches!(sample_sizes(6, 5, 1), Err(CliError::InvalidArgument(_))));
        assert!(matches!(sample_sizes(3, 5, 0), Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_sweep_reports_every_size() {
        let session = RecomputeSession::new();
        let sizes = [3, 10, 50];
        let spec = DistributionSpec::standard();
        let points = sweep(&engine(), &session, spec, &sizes, seeded).unwrap();

        let ns: Vec<usize> = points.iter().map(|p| p.n).collect();
        assert_eq!(ns, sizes);
        assert_eq!(session.latest().unwrap().n, 50);

        // Heavy tails at n = 3 put the t-histogram far from N(0,1)
        assert!(points[0].t_distance_to_normal > points[2].t_distance_to_normal);
    }

    #[test]
    fn test_sweep_skips_superseded_results() {
        let session = RecomputeSession::new();
        let points = sweep(
            &engine(),
            &session,
            DistributionSpec::standard(),
            &[4, 5],
            |engine, spec, n| {
                // A newer request arrives while n = 4 is computing
                if n == 4 {
                    session.begin();
                }
                seeded(engine, spec, n)
            },
        )
        .unwrap();

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].n, 5);
    }

    #[test]
    fn test_sweep_propagates_errors() {
        let session = RecomputeSession::new();
        let result = sweep(&engine(), &session, DistributionSpec::standard(), &[1], seeded);
        assert!(matches!(result, Err(CliError::Sampling(_))));
    }

    #[test]
    fn test_render_sweep() {
        let points = vec![SweepPoint {
            n: 3,
            t_distance: 0.01,
            t_distance_to_normal: 0.4,
            chi_square_distance: 0.02,
        }];
        let table = render(DistributionSpec::standard(), &points, OutputFormat::Table).unwrap();
        assert!(table.starts_with("Population N(0,1)"));
        assert!(table.contains("0.4000"));

        let json = render(DistributionSpec::standard(), &points, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["n"], 3);
        assert_eq!(value[0]["t_distance_to_normal"], 0.4);
    }
}
