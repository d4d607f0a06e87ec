//! Simulation engine.
//!
//! # Overview
//!
//! [`SimulationEngine`] coordinates:
//! 1. Normal sampling (via [`BoxMuller`])
//! 2. Per-trial reduction (via [`generate_trial`])
//! 3. Conversion into the t and chi-squared statistics
//! 4. Histogram construction (via [`sampdist_core::histogram::build`])
//!
//! Every run allocates its own output buffers and hands them back whole,
//! so a caller never sees a partially filled sample.

use std::time::Instant;

use sampdist_core::densities::{ChiSquared, Density, StandardNormal, StudentT};
use sampdist_core::histogram::{build, Histogram};
use sampdist_core::{DistributionSpec, SamplingResult};

#[cfg(feature = "serde")]
use serde::Serialize;

use super::config::SimulationConfig;
use crate::rng::RandomSource;
use crate::sampler::BoxMuller;
use crate::trial::{generate_trial, validate_sample_size, RunningMoments};

#[cfg(feature = "parallel")]
use crate::rng::SourceFactory;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Trials handled by one parallel chunk.
#[cfg(feature = "parallel")]
pub const TRIALS_PER_CHUNK: usize = 512;

/// Raw statistics of one run, one entry per trial.
///
/// Entry `i` of both sequences comes from the same trial, so the two
/// statistics are paired observations of their joint distribution.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StatisticSample {
    t_stats: Vec<f64>,
    chi_square_stats: Vec<f64>,
}

impl StatisticSample {
    /// t-statistics `(x̄ − μ) / √(s²/n)`.
    #[inline]
    pub fn t_stats(&self) -> &[f64] {
        &self.t_stats
    }

    /// Chi-squared statistics `(n − 1)·s² / σ²`.
    #[inline]
    pub fn chi_square_stats(&self) -> &[f64] {
        &self.chi_square_stats
    }

    /// Number of trials.
    #[inline]
    pub fn len(&self) -> usize {
        self.t_stats.len()
    }

    /// Whether the sample holds no trials.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.t_stats.is_empty()
    }

    /// Mean and variance of the finite t-statistics.
    pub fn t_moments(&self) -> RunningMoments {
        moments(&self.t_stats)
    }

    /// Mean and variance of the chi-squared statistics.
    pub fn chi_square_moments(&self) -> RunningMoments {
        moments(&self.chi_square_stats)
    }
}

fn moments(values: &[f64]) -> RunningMoments {
    let mut acc = RunningMoments::new();
    for &v in values.iter().filter(|v| v.is_finite()) {
        acc.update(v);
    }
    acc
}

/// Histograms of one simulation run, with the theoretical densities they
/// are compared against.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SimulationResult {
    /// Population the samples were drawn from.
    pub spec: DistributionSpec,
    /// Sample size per trial.
    pub n: usize,
    /// Histogram of the t-statistics.
    pub t_histogram: Histogram,
    /// Histogram of the chi-squared statistics.
    pub chi_square_histogram: Histogram,
    #[cfg_attr(feature = "serde", serde(skip))]
    t_density: StudentT,
    #[cfg_attr(feature = "serde", serde(skip))]
    chi_square_density: ChiSquared,
}

impl SimulationResult {
    /// Student's t with `n − 1` degrees of freedom.
    #[inline]
    pub fn t_density(&self) -> StudentT {
        self.t_density
    }

    /// Chi-squared with `n − 1` degrees of freedom.
    #[inline]
    pub fn chi_square_density(&self) -> ChiSquared {
        self.chi_square_density
    }

    /// Theoretical t curve at each t-histogram bin centre.
    pub fn t_overlay(&self) -> Vec<(f64, f64)> {
        self.t_histogram.overlay(&self.t_density)
    }

    /// Theoretical chi-squared curve at each chi-squared bin centre.
    pub fn chi_square_overlay(&self) -> Vec<(f64, f64)> {
        self.chi_square_histogram.overlay(&self.chi_square_density)
    }

    /// Total variation distance between the t-histogram and Student's t.
    pub fn t_distance(&self) -> f64 {
        self.t_histogram.total_variation_distance(&self.t_density)
    }

    /// Total variation distance between the t-histogram and N(0, 1).
    pub fn t_distance_to_normal(&self) -> f64 {
        self.t_histogram.total_variation_distance(&StandardNormal)
    }

    /// Total variation distance between the chi-squared histogram and its density.
    pub fn chi_square_distance(&self) -> f64 {
        self.chi_square_histogram
            .total_variation_distance(&self.chi_square_density)
    }

    /// Evaluates an arbitrary density over the t-histogram grid.
    pub fn t_overlay_with<D: Density>(&self, density: &D) -> Vec<(f64, f64)> {
        self.t_histogram.overlay(density)
    }
}

/// Monte Carlo engine for the sampling distributions of x̄ and s².
///
/// # Examples
///
/// ```rust
/// use sampdist_core::DistributionSpec;
/// use sampdist_engine::rng::SeededSource;
/// use sampdist_engine::sim::{SimulationConfig, SimulationEngine};
///
/// let engine = SimulationEngine::new(
///     SimulationConfig::builder().simulation_count(1_000).build().unwrap(),
/// );
/// let sample = engine
///     .run(DistributionSpec::standard(), 5, SeededSource::from_seed(3))
///     .unwrap();
/// assert_eq!(sample.len(), 1_000);
/// assert!(sample.chi_square_stats().iter().all(|&c| c >= 0.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationEngine {
    config: SimulationConfig,
}

impl SimulationEngine {
    /// Creates an engine with the given configuration.
    #[inline]
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs `simulation_count` trials of size `n` from `spec`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `n < 2`.
    pub fn run<R: RandomSource>(
        &self,
        spec: DistributionSpec,
        n: usize,
        source: R,
    ) -> SamplingResult<StatisticSample> {
        validate_sample_size(n)?;
        let start = Instant::now();
        let count = self.config.simulation_count();

        let mut sample = StatisticSample {
            t_stats: Vec::with_capacity(count),
            chi_square_stats: Vec::with_capacity(count),
        };
        self.run_trials(spec, n, count, source, &mut sample)?;

        tracing::debug!(
            %spec,
            n,
            trials = count,
            elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
            "Simulation run complete"
        );
        Ok(sample)
    }

    /// Runs the trials across the Rayon thread pool.
    ///
    /// Trials are split into chunks of [`TRIALS_PER_CHUNK`]; chunk `i`
    /// draws from `factory.create(i)` and chunks are concatenated in
    /// index order, so the output only depends on the factory.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `n < 2`.
    #[cfg(feature = "parallel")]
    pub fn run_parallel<F: SourceFactory>(
        &self,
        spec: DistributionSpec,
        n: usize,
        factory: &F,
    ) -> SamplingResult<StatisticSample> {
        validate_sample_size(n)?;
        let start = Instant::now();
        let count = self.config.simulation_count();
        let n_chunks = count.div_ceil(TRIALS_PER_CHUNK);

        let chunks = (0..n_chunks)
            .into_par_iter()
            .map(|chunk| {
                let offset = chunk * TRIALS_PER_CHUNK;
                let len = TRIALS_PER_CHUNK.min(count - offset);
                let mut part = StatisticSample {
                    t_stats: Vec::with_capacity(len),
                    chi_square_stats: Vec::with_capacity(len),
                };
                self.run_trials(spec, n, len, factory.create(chunk), &mut part)?;
                Ok(part)
            })
            .collect::<SamplingResult<Vec<_>>>()?;

        let mut sample = StatisticSample {
            t_stats: Vec::with_capacity(count),
            chi_square_stats: Vec::with_capacity(count),
        };
        for part in chunks {
            sample.t_stats.extend(part.t_stats);
            sample.chi_square_stats.extend(part.chi_square_stats);
        }

        tracing::debug!(
            %spec,
            n,
            trials = count,
            chunks = n_chunks,
            elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
            "Parallel simulation run complete"
        );
        Ok(sample)
    }

    /// Runs a simulation and bins both statistics.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `n < 2`.
    pub fn recompute<R: RandomSource>(
        &self,
        spec: DistributionSpec,
        n: usize,
        source: R,
    ) -> SamplingResult<SimulationResult> {
        let sample = self.run(spec, n, source)?;
        self.summarise(spec, n, &sample)
    }

    /// Parallel counterpart of [`SimulationEngine::recompute`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `n < 2`.
    #[cfg(feature = "parallel")]
    pub fn recompute_parallel<F: SourceFactory>(
        &self,
        spec: DistributionSpec,
        n: usize,
        factory: &F,
    ) -> SamplingResult<SimulationResult> {
        let sample = self.run_parallel(spec, n, factory)?;
        self.summarise(spec, n, &sample)
    }

    /// Bins an existing sample into t and chi-squared histograms.
    ///
    /// Non-finite t-statistics (a trial with `s² == 0`) are dropped before
    /// binning and logged.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` when `n < 2`
    /// - `EmptyInput` when no finite statistic remains
    pub fn summarise(
        &self,
        spec: DistributionSpec,
        n: usize,
        sample: &StatisticSample,
    ) -> SamplingResult<SimulationResult> {
        validate_sample_size(n)?;
        let bin_count = self.config.bin_count();

        let t_finite: Vec<f64> = sample
            .t_stats
            .iter()
            .copied()
            .filter(|t| t.is_finite())
            .collect();
        let dropped = sample.t_stats.len() - t_finite.len();
        if dropped > 0 {
            tracing::warn!(dropped, n, "Dropped non-finite t-statistics");
        }

        let t_histogram = build(&t_finite, bin_count)?;
        let chi_square_histogram = build(&sample.chi_square_stats, bin_count)?;

        Ok(SimulationResult {
            spec,
            n,
            t_histogram,
            chi_square_histogram,
            t_density: StudentT::from_sample_size(n)?,
            chi_square_density: ChiSquared::from_sample_size(n)?,
        })
    }

    fn run_trials<R: RandomSource>(
        &self,
        spec: DistributionSpec,
        n: usize,
        count: usize,
        source: R,
        out: &mut StatisticSample,
    ) -> SamplingResult<()> {
        let mut sampler = if self.config.pair_reuse() {
            BoxMuller::with_pair_reuse(source)
        } else {
            BoxMuller::new(source)
        };

        let mean = spec.mean();
        let variance = spec.variance();
        let n_f = n as f64;

        for _ in 0..count {
            let trial = generate_trial(&mut sampler, n, mean, variance)?;
            out.t_stats.push((trial.x_bar - mean) / (trial.s2 / n_f).sqrt());
            out.chi_square_stats.push((n_f - 1.0) * trial.s2 / variance);
        }
        Ok(())
    }
}
