//! Theoretical probability densities for the sampling distributions.
//!
//! For a sample of size `n` from a normal population:
//!
//! - the standardised mean `(x̄ − μ) / √(s²/n)` follows Student's t with
//!   `v = n − 1` degrees of freedom
//! - the scaled variance `(n − 1)·s² / σ²` follows chi-squared with
//!   `k = n − 1` degrees of freedom
//!
//! Normalisation constants are computed in log space through
//! [`ln_gamma`] so the Gamma ratios never overflow, and the distribution
//! types precompute them once. Evaluating a density never allocates.
//!
//! # Examples
//!
//! ```
//! use sampdist_core::densities::{ChiSquared, Density, StudentT};
//!
//! let t = StudentT::new(9.0).unwrap();
//! let chi = ChiSquared::new(9.0).unwrap();
//!
//! assert!(t.pdf(0.0) > t.pdf(1.0));
//! assert_eq!(chi.pdf(-1.0), 0.0);
//! ```

use std::f64::consts::{LN_2, PI};

use crate::error::{SamplingError, SamplingResult};
use crate::special::ln_gamma;

/// 1/√(2π)
const FRAC_1_SQRT_2PI: f64 = 0.3989422804014326779399460599343818684758586311649;

/// A univariate probability density function.
pub trait Density {
    /// Evaluates the density at `x`.
    fn pdf(&self, x: f64) -> f64;
}

impl<F> Density for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Standard normal distribution N(0, 1).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StandardNormal;

impl Density for StandardNormal {
    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        standard_normal(x)
    }
}

/// Student's t distribution with `dof` degrees of freedom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StudentT {
    dof: f64,
    /// ln[Γ((v+1)/2) / (√(vπ)·Γ(v/2))]
    log_norm: f64,
}

impl StudentT {
    /// Creates a t distribution.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `dof` is finite and positive.
    pub fn new(dof: f64) -> SamplingResult<Self> {
        if !(dof.is_finite() && dof > 0.0) {
            return Err(SamplingError::invalid(
                "dof",
                format!("must be finite and positive, got {}", dof),
            ));
        }
        let log_norm = ln_gamma(0.5 * (dof + 1.0))? - ln_gamma(0.5 * dof)? - 0.5 * (dof * PI).ln();
        Ok(Self { dof, log_norm })
    }

    /// t distribution of the standardised mean of a sample of size `n` (`v = n − 1`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `n < 2`.
    pub fn from_sample_size(n: usize) -> SamplingResult<Self> {
        Self::new(dof_from_sample_size(n)?)
    }

    /// Degrees of freedom.
    #[inline]
    pub fn dof(&self) -> f64 {
        self.dof
    }

    /// Mean, defined for `v > 1`.
    pub fn mean(&self) -> Option<f64> {
        (self.dof > 1.0).then_some(0.0)
    }

    /// Variance `v / (v − 2)`, defined for `v > 2`.
    pub fn variance(&self) -> Option<f64> {
        (self.dof > 2.0).then(|| self.dof / (self.dof - 2.0))
    }
}

impl Density for StudentT {
    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        let v = self.dof;
        (self.log_norm - 0.5 * (v + 1.0) * (x * x / v).ln_1p()).exp()
    }
}

/// Chi-squared distribution with `dof` degrees of freedom.
///
/// Support is `(0, ∞)`; the density is `0` for `x <= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChiSquared {
    dof: f64,
    /// −ln[2^(k/2)·Γ(k/2)]
    log_norm: f64,
}

impl ChiSquared {
    /// Creates a chi-squared distribution.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `dof` is finite and positive.
    pub fn new(dof: f64) -> SamplingResult<Self> {
        if !(dof.is_finite() && dof > 0.0) {
            return Err(SamplingError::invalid(
                "dof",
                format!("must be finite and positive, got {}", dof),
            ));
        }
        let half = 0.5 * dof;
        let log_norm = -(half * LN_2) - ln_gamma(half)?;
        Ok(Self { dof, log_norm })
    }

    /// Chi-squared distribution of `(n − 1)·s²/σ²` for a sample of size `n`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `n < 2`.
    pub fn from_sample_size(n: usize) -> SamplingResult<Self> {
        Self::new(dof_from_sample_size(n)?)
    }

    /// Degrees of freedom.
    #[inline]
    pub fn dof(&self) -> f64 {
        self.dof
    }

    /// Mean `k`.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.dof
    }

    /// Variance `2k`.
    #[inline]
    pub fn variance(&self) -> f64 {
        2.0 * self.dof
    }
}

impl Density for ChiSquared {
    fn pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        // Closed support at 0 also keeps 0^negative (k < 2) out of the formula
        if x <= 0.0 {
            return 0.0;
        }
        let half = 0.5 * self.dof;
        (self.log_norm + (half - 1.0) * x.ln() - 0.5 * x).exp()
    }
}

fn dof_from_sample_size(n: usize) -> SamplingResult<f64> {
    if n < 2 {
        return Err(SamplingError::invalid(
            "n",
            format!("sample size must be >= 2, got {}", n),
        ));
    }
    Ok((n - 1) as f64)
}

/// Standard normal PDF φ(x) = (1/√(2π))·exp(−x²/2).
///
/// # Examples
///
/// ```
/// use sampdist_core::densities::standard_normal;
///
/// assert!((standard_normal(0.0) - 0.3989422804014327).abs() < 1e-15);
/// ```
#[inline]
pub fn standard_normal(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Student's t density at `x` for sample size `n` (`v = n − 1`).
///
/// Returns NaN when `n < 2`, where the distribution is undefined.
pub fn theoretical_t(x: f64, n: usize) -> f64 {
    StudentT::from_sample_size(n).map_or(f64::NAN, |t| t.pdf(x))
}

/// Chi-squared density at `x` for sample size `n` (`k = n − 1`).
///
/// Returns `0` outside the support and NaN when `n < 2`.
pub fn theoretical_chi_square(x: f64, n: usize) -> f64 {
    ChiSquared::from_sample_size(n).map_or(f64::NAN, |chi| chi.pdf(x))
}
