//! Normal population specification.
//!
//! A population is written `N(<mean>,<variance>)`, e.g. `N(0,1)` or
//! `N(-2.5, 4e-1)`. Parsing is lenient: anything that does not match, or
//! that carries a non-positive or non-finite variance, becomes the standard
//! normal `N(0,1)` so a free-text entry never breaks the caller.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{SamplingError, SamplingResult};

#[cfg(feature = "serde")]
use serde::Serialize;

static SPEC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*N\(\s*([^,()\s]+)\s*,\s*([^,()\s]+)\s*\)\s*$")
        .expect("distribution spec pattern is valid")
});

/// Parameters of a normal population, `N(mean, variance)`.
///
/// # Invariants
///
/// `variance` is finite and strictly positive and `mean` is finite.
///
/// # Examples
///
/// ```
/// use sampdist_core::DistributionSpec;
///
/// let spec = DistributionSpec::parse("N(10, 4)");
/// assert_eq!(spec.mean(), 10.0);
/// assert_eq!(spec.std_dev(), 2.0);
///
/// assert_eq!(DistributionSpec::parse("garbage"), DistributionSpec::standard());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DistributionSpec {
    mean: f64,
    variance: f64,
}

impl DistributionSpec {
    /// Creates a specification, validating the parameters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `mean` is not finite or `variance`
    /// is not finite and positive.
    pub fn new(mean: f64, variance: f64) -> SamplingResult<Self> {
        if !mean.is_finite() {
            return Err(SamplingError::invalid(
                "mean",
                format!("must be finite, got {}", mean),
            ));
        }
        if !(variance.is_finite() && variance > 0.0) {
            return Err(SamplingError::invalid(
                "variance",
                format!("must be finite and positive, got {}", variance),
            ));
        }
        Ok(Self { mean, variance })
    }

    /// The standard normal `N(0, 1)`.
    #[inline]
    pub const fn standard() -> Self {
        Self {
            mean: 0.0,
            variance: 1.0,
        }
    }

    /// Parses `N(<mean>,<variance>)`, falling back to [`DistributionSpec::standard`].
    ///
    /// The fallback is logged at `warn` level and never reported as an error.
    pub fn parse(input: &str) -> Self {
        match Self::try_parse(input) {
            Ok(spec) => spec,
            Err(err) => {
                tracing::warn!(input, error = %err, "Falling back to N(0,1)");
                Self::standard()
            }
        }
    }

    /// Strict variant of [`DistributionSpec::parse`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when the text does not match the
    /// pattern or the parameters are out of range.
    pub fn try_parse(input: &str) -> SamplingResult<Self> {
        let captures = SPEC_PATTERN.captures(input).ok_or_else(|| {
            SamplingError::invalid(
                "distribution",
                format!("expected N(mean,variance), got '{}'", input),
            )
        })?;

        let mean = parse_number("mean", &captures[1])?;
        let variance = parse_number("variance", &captures[2])?;
        Self::new(mean, variance)
    }

    /// Population mean μ.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance σ².
    #[inline]
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Population standard deviation σ.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

impl Default for DistributionSpec {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for DistributionSpec {
    type Err = SamplingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl fmt::Display for DistributionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N({},{})", self.mean, self.variance)
    }
}

fn parse_number(name: &'static str, text: &str) -> SamplingResult<f64> {
    text.parse::<f64>()
        .map_err(|e| SamplingError::invalid(name, format!("'{}' is not a number: {}", text, e)))
}
