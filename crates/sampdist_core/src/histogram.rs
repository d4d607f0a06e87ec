//! Equal-width histograms with density normalisation.
//!
//! The bin range is taken from the data itself (`min`..`max`) and split
//! into a fixed number of bins. Counts are converted into a density
//! estimate `count / (total × bin_width)` so that the histogram integrates
//! to one and can be drawn against a theoretical pdf.
//!
//! # Degenerate data
//!
//! When every value is equal the range has zero width. The histogram then
//! holds a single bin centred on that value with `bin_width == 0` and
//! `density == 1.0`, i.e. a unit point mass. Nothing is divided by zero.

use crate::densities::Density;
use crate::error::{SamplingError, SamplingResult};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Number of bins used for the sampling-distribution histograms.
pub const BIN_COUNT: usize = 20;

/// One histogram bin.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HistogramBin {
    /// Midpoint of the bin.
    pub center: f64,
    /// Empirical density `count / (total × bin_width)`.
    pub density: f64,
    /// Number of samples that fell into the bin.
    pub count: usize,
}

/// Ordered equal-width bins over the data range.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    bin_width: f64,
    min: f64,
    max: f64,
    total: usize,
}

impl Histogram {
    /// Bins in ascending order of centre.
    #[inline]
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Common width of every bin (`0` for degenerate data).
    #[inline]
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Smallest binned value.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest binned value.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Number of values binned.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether all values were identical.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.bin_width == 0.0
    }

    /// Total probability mass, `Σ density × bin_width`.
    ///
    /// For a degenerate histogram the single bin's density already is a mass.
    pub fn total_mass(&self) -> f64 {
        if self.is_degenerate() {
            return self.bins.iter().map(|b| b.density).sum();
        }
        self.bins.iter().map(|b| b.density * self.bin_width).sum()
    }

    /// Evaluates `density` at every bin centre, as `(center, pdf)` pairs.
    pub fn overlay<D: Density>(&self, density: &D) -> Vec<(f64, f64)> {
        self.bins
            .iter()
            .map(|b| (b.center, density.pdf(b.center)))
            .collect()
    }

    /// Total variation distance between the histogram and `density`,
    /// approximated on the bin grid: `½ Σ |ĥᵢ − f(cᵢ)| × w`.
    ///
    /// Returns `1.0` for a degenerate histogram, which has no width to
    /// compare over.
    pub fn total_variation_distance<D: Density>(&self, density: &D) -> f64 {
        if self.is_degenerate() {
            return 1.0;
        }
        0.5 * self
            .bins
            .iter()
            .map(|b| (b.density - density.pdf(b.center)).abs() * self.bin_width)
            .sum::<f64>()
    }
}

/// Bins `data` into `bin_count` equal-width bins spanning its own range.
///
/// Bin index is `floor((v − min) / width)` clamped to `bin_count − 1`, so
/// the maximum lands in the last bin.
///
/// # Errors
///
/// - `EmptyInput` if `data` is empty
/// - `InvalidParameter` if `bin_count == 0`, `data` contains a non-finite
///   value, or a single bin would be wider than `f64::MAX`
///
/// # Examples
///
/// ```
/// use sampdist_core::histogram::build;
///
/// let histogram = build(&[1.0, 2.0, 2.5, 4.0], 3).unwrap();
/// assert_eq!(histogram.bin_width(), 1.0);
/// let counts: Vec<usize> = histogram.bins().iter().map(|b| b.count).collect();
/// assert_eq!(counts, vec![1, 2, 1]);
/// assert!((histogram.total_mass() - 1.0).abs() < 1e-12);
/// ```
pub fn build(data: &[f64], bin_count: usize) -> SamplingResult<Histogram> {
    if bin_count == 0 {
        return Err(SamplingError::invalid("bin_count", "must be >= 1"));
    }
    if data.is_empty() {
        return Err(SamplingError::EmptyInput);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in data {
        if !value.is_finite() {
            return Err(SamplingError::invalid(
                "data",
                format!("non-finite value {}", value),
            ));
        }
        min = min.min(value);
        max = max.max(value);
    }

    let total = data.len();

    if max == min {
        return Ok(Histogram {
            bins: vec![HistogramBin {
                center: min,
                density: 1.0,
                count: total,
            }],
            bin_width: 0.0,
            min,
            max,
            total,
        });
    }

    // Halving is exact for normal floats and keeps max − min representable
    let scale = if (max - min).is_finite() { 1.0 } else { 0.5 };
    let bin_width = (max * scale - min * scale) / bin_count as f64 / scale;
    if !bin_width.is_finite() {
        return Err(SamplingError::invalid(
            "data",
            format!("range [{}, {}] too wide for {} bin(s)", min, max, bin_count),
        ));
    }

    let scaled_width = bin_width * scale;
    let mut counts = vec![0usize; bin_count];
    for &value in data {
        let index = ((value * scale - min * scale) / scaled_width).floor() as usize;
        counts[index.min(bin_count - 1)] += 1;
    }

    let per_count = 1.0 / (total as f64 * bin_width);
    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            center: min + (i as f64 + 0.5) * bin_width,
            density: count as f64 * per_count,
            count,
        })
        .collect();

    Ok(Histogram {
        bins,
        bin_width,
        min,
        max,
        total,
    })
}
