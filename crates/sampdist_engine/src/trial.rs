//! One trial: draw `n` normal values and reduce them to (x̄, s²).
//!
//! The reduction uses Welford's online update rather than the textbook
//! `(Σx² − n·x̄²)/(n − 1)`, so `s²` is never negative from cancellation,
//! whatever the population mean.
//!
//! Reference: Welford (1962), *Technometrics* 4(3), pp. 419–420.

use sampdist_core::{SamplingError, SamplingResult};

use crate::rng::RandomSource;
use crate::sampler::BoxMuller;

/// Sample mean and unbiased sample variance of one batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trial {
    /// Sample mean x̄.
    pub x_bar: f64,
    /// Unbiased sample variance s².
    pub s2: f64,
}

/// Streaming mean and sum of squared deviations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunningMoments {
    count: usize,
    mean: f64,
    m2: f64,
}

impl RunningMoments {
    /// Creates an empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one value.
    #[inline]
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    /// Number of values fed.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Running mean; `None` when empty.
    #[inline]
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Unbiased sample variance; `None` for fewer than two values.
    #[inline]
    pub fn sample_variance(&self) -> Option<f64> {
        (self.count > 1).then(|| self.m2 / (self.count - 1) as f64)
    }
}

/// Draws `n` values from N(`mean`, `variance`) and returns their (x̄, s²).
///
/// # Errors
///
/// Returns `InvalidParameter` when `n < 2` (s² undefined) or `variance`
/// is not finite and positive.
///
/// # Examples
///
/// ```rust
/// use sampdist_engine::rng::SeededSource;
/// use sampdist_engine::sampler::BoxMuller;
/// use sampdist_engine::trial::generate_trial;
///
/// let mut sampler = BoxMuller::new(SeededSource::from_seed(1));
/// let trial = generate_trial(&mut sampler, 10, 0.0, 1.0).unwrap();
/// assert!(trial.s2 >= 0.0);
///
/// assert!(generate_trial(&mut sampler, 1, 0.0, 1.0).is_err());
/// ```
pub fn generate_trial<R: RandomSource>(
    sampler: &mut BoxMuller<R>,
    n: usize,
    mean: f64,
    variance: f64,
) -> SamplingResult<Trial> {
    validate_sample_size(n)?;
    if !(variance.is_finite() && variance > 0.0) {
        return Err(SamplingError::invalid(
            "variance",
            format!("must be finite and positive, got {}", variance),
        ));
    }

    let mut moments = RunningMoments::new();
    for _ in 0..n {
        moments.update(sampler.sample(mean, variance));
    }

    Ok(Trial {
        x_bar: moments.mean,
        s2: moments.m2 / (n - 1) as f64,
    })
}

/// Rejects sample sizes for which the sample variance is undefined.
pub(crate) fn validate_sample_size(n: usize) -> SamplingResult<()> {
    if n < 2 {
        return Err(SamplingError::invalid(
            "n",
            format!("sample size must be >= 2, got {}", n),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ReplaySource, SeededSource};
    use approx::assert_relative_eq;

    #[test]
    fn test_running_moments_known_values() {
        let mut acc = RunningMoments::new();
        assert_eq!(acc.mean(), None);
        for &x in &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            acc.update(x);
        }
        assert_eq!(acc.count(), 8);
        assert_relative_eq!(acc.mean().unwrap(), 5.0);
        assert_relative_eq!(acc.sample_variance().unwrap(), 32.0 / 7.0, max_relative = 1e-12);
    }

    #[test]
    fn test_running_moments_single_value() {
        let mut acc = RunningMoments::new();
        acc.update(3.0);
        assert_eq!(acc.mean(), Some(3.0));
        assert_eq!(acc.sample_variance(), None);
    }

    #[test]
    fn test_trial_matches_direct_computation() {
        let values = vec![0.11, 0.73, 0.42, 0.95, 0.27, 0.58];
        let mut direct = BoxMuller::new(ReplaySource::new(values.clone()).unwrap());
        let draws: Vec<f64> = (0..5).map(|_| direct.sample(2.0, 3.0)).collect();
        let mean = draws.iter().sum::<f64>() / 5.0;
        let s2 = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / 4.0;

        let mut sampler = BoxMuller::new(ReplaySource::new(values).unwrap());
        let trial = generate_trial(&mut sampler, 5, 2.0, 3.0).unwrap();
        assert_relative_eq!(trial.x_bar, mean, max_relative = 1e-12);
        assert_relative_eq!(trial.s2, s2, max_relative = 1e-12);
    }

    #[test]
    fn test_constant_draws_give_zero_variance() {
        // A fixed (u1, u2) pair produces the same value every time
        let mut sampler = BoxMuller::new(ReplaySource::new(vec![0.5, 0.5]).unwrap());
        let trial = generate_trial(&mut sampler, 10, 1e6, 1.0).unwrap();
        assert_eq!(trial.s2, 0.0);
        let z = (-2.0 * 0.5_f64.ln()).sqrt() * std::f64::consts::PI.cos();
        assert_relative_eq!(trial.x_bar, 1e6 + z, max_relative = 1e-12);
    }

    #[test]
    fn test_small_sample_rejected() {
        let mut sampler = BoxMuller::new(SeededSource::from_seed(0));
        for n in [0, 1] {
            assert!(matches!(
                generate_trial(&mut sampler, n, 0.0, 1.0),
                Err(SamplingError::InvalidParameter { name: "n", .. })
            ));
        }
    }

    #[test]
    fn test_bad_variance_rejected() {
        let mut sampler = BoxMuller::new(SeededSource::from_seed(0));
        for variance in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                generate_trial(&mut sampler, 5, 0.0, variance),
                Err(SamplingError::InvalidParameter {
                    name: "variance",
                    ..
                })
            ));
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn uniform_strategy() -> impl Strategy<Value = f64> {
            1e-12f64..1.0
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_sample_variance_non_negative(
                values in prop::collection::vec(uniform_strategy(), 2..64),
                n in 2usize..50,
                mean in -1e6f64..1e6,
                variance in 1e-6f64..1e6
            ) {
                let mut sampler = BoxMuller::new(ReplaySource::new(values).unwrap());
                let trial = generate_trial(&mut sampler, n, mean, variance).unwrap();
                prop_assert!(trial.s2 >= 0.0, "s2 = {}", trial.s2);
                prop_assert!(trial.x_bar.is_finite());
            }
        }
    }
}
