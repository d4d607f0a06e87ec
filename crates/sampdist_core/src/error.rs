//! Error types for sampling-distribution computations.
//!
//! Every failure the numerical core can report is a precondition violation.
//! Callers are expected to validate ranges up front, but each kind stays
//! distinguishable so tests can match on it rather than on a generic failure.

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type SamplingResult<T> = Result<T, SamplingError>;

/// Sampling-distribution errors.
///
/// # Variants
///
/// - `Domain`: Gamma function evaluated at a pole (non-positive integer) or NaN
/// - `InvalidParameter`: Out-of-range engine input (`n < 2`, `variance <= 0`, ...)
/// - `EmptyInput`: Histogram requested over zero samples
///
/// # Examples
///
/// ```
/// use sampdist_core::SamplingError;
///
/// let err = SamplingError::Domain { z: -2.0 };
/// assert!(format!("{}", err).contains("-2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// Argument outside the domain of the Gamma function.
    #[error("Domain error: gamma undefined at z = {z}")]
    Domain {
        /// The offending argument
        z: f64,
    },

    /// Parameter outside its valid range.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        value: String,
    },

    /// Histogram over an empty sample.
    #[error("Empty input: cannot bin zero samples")]
    EmptyInput,
}

impl SamplingError {
    /// Shorthand for building an [`SamplingError::InvalidParameter`].
    pub fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}
