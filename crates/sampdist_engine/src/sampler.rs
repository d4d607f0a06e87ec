//! Box–Muller normal sampling.
//!
//! Two independent uniforms `u1, u2` map to a standard normal variate
//!
//! ```text
//! z = √(−2 ln u1) · cos(2π u2)
//! ```
//!
//! which is then scaled to `mean + √variance · z`.
//!
//! The transform also yields an independent second variate
//! `√(−2 ln u1) · sin(2π u2)`. By default it is discarded so every call
//! consumes exactly two uniform draws. [`BoxMuller::with_pair_reuse`]
//! keeps it and returns it on the following call instead.

use std::f64::consts::TAU;

use crate::rng::RandomSource;

/// Normal sampler driven by a [`RandomSource`].
///
/// # Examples
///
/// ```rust
/// use sampdist_engine::rng::ReplaySource;
/// use sampdist_engine::sampler::BoxMuller;
///
/// let source = ReplaySource::new(vec![0.5, 0.5]).unwrap();
/// let mut sampler = BoxMuller::new(source);
///
/// let expected = (-2.0 * 0.5_f64.ln()).sqrt() * std::f64::consts::PI.cos();
/// assert_eq!(sampler.sample(0.0, 1.0), expected);
/// ```
#[derive(Clone, Debug)]
pub struct BoxMuller<R> {
    source: R,
    reuse_pairs: bool,
    spare: Option<f64>,
}

impl<R: RandomSource> BoxMuller<R> {
    /// Creates a sampler that discards the sine branch.
    #[inline]
    pub fn new(source: R) -> Self {
        Self {
            source,
            reuse_pairs: false,
            spare: None,
        }
    }

    /// Creates a sampler that keeps the sine branch for the next call.
    #[inline]
    pub fn with_pair_reuse(source: R) -> Self {
        Self {
            source,
            reuse_pairs: true,
            spare: None,
        }
    }

    /// Whether the second variate of each pair is reused.
    #[inline]
    pub fn reuses_pairs(&self) -> bool {
        self.reuse_pairs
    }

    /// Draws one standard normal variate.
    pub fn standard(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }

        // Sources exclude 0, but clamp so a misbehaving one cannot produce ln(0)
        let u1 = self.source.next_uniform().max(f64::MIN_POSITIVE);
        let u2 = self.source.next_uniform();

        let radius = (-2.0 * u1.ln()).sqrt();
        let angle = TAU * u2;

        if self.reuse_pairs {
            self.spare = Some(radius * angle.sin());
        }
        radius * angle.cos()
    }

    /// Draws one N(`mean`, `variance`) variate.
    ///
    /// `variance` must be non-negative; callers validate it up front.
    #[inline]
    pub fn sample(&mut self, mean: f64, variance: f64) -> f64 {
        mean + variance.sqrt() * self.standard()
    }

    /// Mutable access to the underlying source.
    #[inline]
    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Consumes the sampler, returning the source.
    #[inline]
    pub fn into_inner(self) -> R {
        self.source
    }
}
