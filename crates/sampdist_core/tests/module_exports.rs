//! Integration tests for module exports and cross-module behaviour.

use approx::assert_abs_diff_eq;

/// Special functions are reachable via absolute path.
#[test]
fn test_special_module_exports() {
    use sampdist_core::special::{gamma, ln_gamma, LANCZOS_G};

    assert_eq!(LANCZOS_G, 7.0);
    assert_eq!(gamma(3.0).unwrap(), 2.0);
    assert!(ln_gamma(3.0).unwrap() > 0.0);
}

/// Root re-exports cover the data model.
#[test]
fn test_root_reexports() {
    use sampdist_core::{DistributionSpec, Histogram, HistogramBin, SamplingError};

    let spec = DistributionSpec::parse("N(1,2)");
    assert_eq!(spec.variance(), 2.0);

    let histogram: Histogram = sampdist_core::histogram::build(&[1.0, 2.0], 1).unwrap();
    let bin: HistogramBin = histogram.bins()[0];
    assert_eq!(bin.count, 2);

    let err: SamplingError = sampdist_core::histogram::build(&[], 1).unwrap_err();
    assert_eq!(err, SamplingError::EmptyInput);
}

/// A histogram of exact normal quantiles lines up with the standard normal pdf.
#[test]
fn test_histogram_of_normal_grid_matches_density() {
    use sampdist_core::densities::{standard_normal, StandardNormal};
    use sampdist_core::histogram::{build, BIN_COUNT};

    // Deterministic sample: x on a fine grid weighted by φ(x), expanded to counts
    let mut data = Vec::new();
    let step = 0.01;
    let mut x = -4.0;
    while x <= 4.0 {
        let copies = (standard_normal(x) * 1000.0).round() as usize;
        data.extend(std::iter::repeat(x).take(copies));
        x += step;
    }

    let histogram = build(&data, BIN_COUNT).unwrap();
    assert_abs_diff_eq!(histogram.total_mass(), 1.0, epsilon = 1e-9);

    let tv = histogram.total_variation_distance(&StandardNormal);
    assert!(tv < 0.05, "tv = {}", tv);
}

/// Theoretical densities are well defined at every bin centre of a chi-squared grid.
#[test]
fn test_chi_square_overlay_is_finite() {
    use sampdist_core::densities::ChiSquared;
    use sampdist_core::histogram::build;

    let data: Vec<f64> = (0..200).map(|i| i as f64 * 0.1).collect();
    let histogram = build(&data, 20).unwrap();
    let chi = ChiSquared::from_sample_size(3).unwrap();

    for (center, pdf) in histogram.overlay(&chi) {
        assert!(center >= 0.0);
        assert!(pdf.is_finite() && pdf >= 0.0);
    }
}
