//! Replay of a fixed uniform sequence.

use sampdist_core::{SamplingError, SamplingResult};

use super::source::RandomSource;

/// Cycles through a fixed, validated sequence of uniform draws.
///
/// Used to inject exact inputs into the sampler and trial generator.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplaySource {
    values: Vec<f64>,
    position: usize,
}

impl ReplaySource {
    /// Creates a replay source.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `values` is empty or any value lies
    /// outside the open interval (0, 1).
    pub fn new(values: Vec<f64>) -> SamplingResult<Self> {
        if values.is_empty() {
            return Err(SamplingError::invalid("values", "replay sequence is empty"));
        }
        if let Some(bad) = values.iter().find(|v| !(**v > 0.0 && **v < 1.0)) {
            return Err(SamplingError::invalid(
                "values",
                format!("{} is outside (0, 1)", bad),
            ));
        }
        Ok(Self {
            values,
            position: 0,
        })
    }

    /// Number of draws taken so far.
    #[inline]
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for ReplaySource {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}
