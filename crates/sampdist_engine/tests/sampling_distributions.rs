//! Convergence tests for the simulated sampling distributions.
//!
//! These tests verify that the empirical histograms agree with the
//! theoretical densities they are plotted against.
//!
//! # Test Categories
//!
//! 1. **Convergence to normality**: the t-histogram approaches N(0,1) as n grows
//! 2. **Shape agreement**: histograms vs Student's t / chi-squared
//! 3. **Population invariance**: the statistics do not depend on μ and σ²

use approx::assert_abs_diff_eq;
use sampdist_core::densities::{standard_normal, Density, StandardNormal};
use sampdist_core::DistributionSpec;
use sampdist_engine::rng::{ReplaySource, SeededSource};
use sampdist_engine::sampler::BoxMuller;
use sampdist_engine::sim::{RecomputeSession, SimulationConfig, SimulationEngine};
use sampdist_engine::trial::generate_trial;

const SEED: u64 = 20_240_601;

fn reference_engine() -> SimulationEngine {
    SimulationEngine::new(SimulationConfig::default())
}

// ============================================================================
// Convergence to normality
// ============================================================================

#[test]
fn test_t_histogram_approaches_normal_as_n_grows() {
    let engine = reference_engine();
    let spec = DistributionSpec::standard();

    let small = engine
        .recompute(spec, 3, SeededSource::from_seed(SEED))
        .unwrap();
    let large = engine
        .recompute(spec, 50, SeededSource::from_seed(SEED))
        .unwrap();

    let tv_small = small.t_distance_to_normal();
    let tv_large = large.t_distance_to_normal();

    assert!(
        tv_large < tv_small,
        "TV(n=50)={:.4} should be below TV(n=3)={:.4}",
        tv_large,
        tv_small
    );
    assert!(tv_large < 0.1, "TV(n=50)={:.4}", tv_large);
}

#[test]
fn test_t_distance_to_normal_trend_over_sweep() {
    let engine = reference_engine();
    let spec = DistributionSpec::standard();

    let distances: Vec<f64> = [3, 10, 50]
        .iter()
        .map(|&n| {
            engine
                .recompute(spec, n, SeededSource::from_seed(SEED))
                .unwrap()
                .t_distance_to_normal()
        })
        .collect();

    // Heavy tails at n = 3 dominate every later distance
    assert!(distances[0] > distances[1], "distances = {:?}", distances);
    assert!(distances[0] > distances[2], "distances = {:?}", distances);
}

// ============================================================================
// Shape agreement
// ============================================================================

#[test]
fn test_histograms_match_theoretical_densities() {
    let engine = reference_engine();
    for n in [20, 30] {
        let result = engine
            .recompute(DistributionSpec::standard(), n, SeededSource::from_seed(SEED + n as u64))
            .unwrap();
        assert!(result.t_distance() < 0.1, "n={} t tv={}", n, result.t_distance());
        assert!(
            result.chi_square_distance() < 0.1,
            "n={} chi tv={}",
            n,
            result.chi_square_distance()
        );
    }
}

#[test]
fn test_histograms_integrate_to_one() {
    let result = reference_engine()
        .recompute(DistributionSpec::parse("N(100,25)"), 8, SeededSource::from_seed(SEED))
        .unwrap();
    assert_abs_diff_eq!(result.t_histogram.total_mass(), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(result.chi_square_histogram.total_mass(), 1.0, epsilon = 1e-9);
    assert_eq!(result.t_histogram.total(), 10_000);
}

// ============================================================================
// Population invariance
// ============================================================================

#[test]
fn test_statistics_invariant_to_population() {
    // Same uniforms, different populations: t and χ² are pivotal quantities
    let engine = SimulationEngine::new(
        SimulationConfig::builder()
            .simulation_count(500)
            .build()
            .unwrap(),
    );
    let a = engine
        .run(DistributionSpec::standard(), 6, SeededSource::from_seed(SEED))
        .unwrap();
    let b = engine
        .run(DistributionSpec::parse("N(-40,9)"), 6, SeededSource::from_seed(SEED))
        .unwrap();

    for (x, y) in a.t_stats().iter().zip(b.t_stats()) {
        assert_abs_diff_eq!(x, y, epsilon = 1e-6);
    }
    for (x, y) in a.chi_square_stats().iter().zip(b.chi_square_stats()) {
        assert_abs_diff_eq!(x, y, epsilon = 1e-8);
    }
}

// ============================================================================
// End-to-end determinism
// ============================================================================

#[test]
fn test_fixed_uniform_pair_is_deterministic() {
    let mut sampler = BoxMuller::new(ReplaySource::new(vec![0.5, 0.5]).unwrap());
    let expected = (-2.0 * 0.5_f64.ln()).sqrt() * std::f64::consts::PI.cos();
    assert_eq!(sampler.sample(0.0, 1.0), expected);
}

#[test]
fn test_seeded_runs_reproduce() {
    let engine = reference_engine();
    let spec = DistributionSpec::parse("N(3,2)");
    let a = engine.recompute(spec, 12, SeededSource::from_seed(1)).unwrap();
    let b = engine.recompute(spec, 12, SeededSource::from_seed(1)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_sample_variance_non_negative_under_real_source() {
    let mut sampler = BoxMuller::new(SeededSource::from_seed(SEED));
    for n in 2..=50 {
        let trial = generate_trial(&mut sampler, n, 1e4, 1e-4).unwrap();
        assert!(trial.s2 >= 0.0);
    }
}

#[test]
fn test_session_sweep_surfaces_last_n() {
    // Animation-style driver: consecutive recomputes, latest one wins
    let engine = SimulationEngine::new(
        SimulationConfig::builder()
            .simulation_count(1_000)
            .build()
            .unwrap(),
    );
    let session = RecomputeSession::new();
    for n in 3..=8 {
        session
            .recompute(&engine, DistributionSpec::standard(), n, SeededSource::from_seed(n as u64))
            .unwrap();
    }
    assert_eq!(session.latest().unwrap().n, 8);
}

#[test]
fn test_standard_normal_overlay_consistency() {
    let result = reference_engine()
        .recompute(DistributionSpec::standard(), 30, SeededSource::from_seed(SEED))
        .unwrap();
    for (x, pdf) in result.t_overlay_with(&StandardNormal) {
        assert_eq!(pdf, standard_normal(x));
        assert_eq!(pdf, StandardNormal.pdf(x));
    }
}
