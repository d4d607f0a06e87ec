//! Simulation configuration.
//!
//! The number of trials and histogram bins are fixed configuration, not
//! user input; the defaults reproduce the reference simulation
//! (10 000 trials, 20 bins). The builder exists so tests and benchmarks
//! can run smaller simulations.

use sampdist_core::histogram::BIN_COUNT;
use sampdist_core::{SamplingError, SamplingResult};

/// Number of trials per simulation run.
pub const SIMULATION_COUNT: usize = 10_000;

/// Maximum number of trials allowed.
pub const MAX_SIMULATIONS: usize = 10_000_000;

/// Maximum number of histogram bins allowed.
pub const MAX_BINS: usize = 10_000;

/// Immutable simulation configuration.
///
/// # Examples
///
/// ```rust
/// use sampdist_engine::sim::SimulationConfig;
///
/// let config = SimulationConfig::default();
/// assert_eq!(config.simulation_count(), 10_000);
/// assert_eq!(config.bin_count(), 20);
///
/// let small = SimulationConfig::builder()
///     .simulation_count(500)
///     .bin_count(10)
///     .build()
///     .unwrap();
/// assert_eq!(small.simulation_count(), 500);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    simulation_count: usize,
    bin_count: usize,
    pair_reuse: bool,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Number of trials per run.
    #[inline]
    pub fn simulation_count(&self) -> usize {
        self.simulation_count
    }

    /// Number of histogram bins.
    #[inline]
    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    /// Whether the sampler reuses the second Box–Muller variate.
    #[inline]
    pub fn pair_reuse(&self) -> bool {
        self.pair_reuse
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - `simulation_count` is 0 or greater than 10,000,000
    /// - `bin_count` is 0 or greater than 10,000
    pub fn validate(&self) -> SamplingResult<()> {
        if self.simulation_count == 0 || self.simulation_count > MAX_SIMULATIONS {
            return Err(SamplingError::invalid(
                "simulation_count",
                format!(
                    "{} outside range [1, {}]",
                    self.simulation_count, MAX_SIMULATIONS
                ),
            ));
        }
        if self.bin_count == 0 || self.bin_count > MAX_BINS {
            return Err(SamplingError::invalid(
                "bin_count",
                format!("{} outside range [1, {}]", self.bin_count, MAX_BINS),
            ));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            simulation_count: SIMULATION_COUNT,
            bin_count: BIN_COUNT,
            pair_reuse: false,
        }
    }
}

/// Builder for [`SimulationConfig`]; unset fields keep their defaults.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    simulation_count: Option<usize>,
    bin_count: Option<usize>,
    pair_reuse: bool,
}

impl SimulationConfigBuilder {
    /// Sets the number of trials, in [1, 10_000_000].
    #[inline]
    pub fn simulation_count(mut self, simulation_count: usize) -> Self {
        self.simulation_count = Some(simulation_count);
        self
    }

    /// Sets the number of histogram bins, in [1, 10_000].
    #[inline]
    pub fn bin_count(mut self, bin_count: usize) -> Self {
        self.bin_count = Some(bin_count);
        self
    }

    /// Enables reuse of the second Box–Muller variate.
    #[inline]
    pub fn pair_reuse(mut self, pair_reuse: bool) -> Self {
        self.pair_reuse = pair_reuse;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a count is out of range.
    pub fn build(self) -> SamplingResult<SimulationConfig> {
        let config = SimulationConfig {
            simulation_count: self.simulation_count.unwrap_or(SIMULATION_COUNT),
            bin_count: self.bin_count.unwrap_or(BIN_COUNT),
            pair_reuse: self.pair_reuse,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SimulationConfig::builder().build().unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.simulation_count(), SIMULATION_COUNT);
        assert_eq!(config.bin_count(), BIN_COUNT);
        assert!(!config.pair_reuse());
    }

    #[test]
    fn test_config_builder_overrides() {
        let config = SimulationConfig::builder()
            .simulation_count(1234)
            .bin_count(7)
            .pair_reuse(true)
            .build()
            .unwrap();
        assert_eq!(config.simulation_count(), 1234);
        assert_eq!(config.bin_count(), 7);
        assert!(config.pair_reuse());
    }

    #[test]
    fn test_config_invalid_zero_simulations() {
        let result = SimulationConfig::builder().simulation_count(0).build();
        assert!(matches!(
            result,
            Err(SamplingError::InvalidParameter {
                name: "simulation_count",
                ..
            })
        ));
    }

    #[test]
    fn test_config_invalid_too_many_simulations() {
        let result = SimulationConfig::builder()
            .simulation_count(MAX_SIMULATIONS + 1)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_invalid_bins() {
        assert!(SimulationConfig::builder().bin_count(0).build().is_err());
        assert!(SimulationConfig::builder()
            .bin_count(MAX_BINS + 1)
            .build()
            .is_err());
    }
}
