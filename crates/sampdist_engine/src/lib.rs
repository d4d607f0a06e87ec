//! # sampdist_engine (Layer 3: Monte Carlo Engine)
//!
//! Monte Carlo simulation of the sampling distributions of the sample mean
//! and sample variance of a normal population.
//!
//! This crate provides:
//! - A uniform randomness seam ([`rng::RandomSource`]) with seeded and replay sources
//! - Box–Muller normal sampling ([`sampler::BoxMuller`])
//! - Per-trial reduction to sample mean and unbiased sample variance ([`trial`])
//! - The simulation engine producing t and chi-squared histograms ([`sim`])
//! - Latest-result-wins recomputation ([`sim::RecomputeSession`])
//!
//! ## Usage Example
//!
//! ```rust
//! use sampdist_core::DistributionSpec;
//! use sampdist_engine::rng::SeededSource;
//! use sampdist_engine::sim::{SimulationConfig, SimulationEngine};
//!
//! let config = SimulationConfig::builder()
//!     .simulation_count(2_000)
//!     .build()
//!     .unwrap();
//! let engine = SimulationEngine::new(config);
//!
//! let spec = DistributionSpec::parse("N(5,4)");
//! let result = engine
//!     .recompute(spec, 10, SeededSource::from_seed(42))
//!     .unwrap();
//!
//! assert_eq!(result.t_histogram.bins().len(), 20);
//! assert!((result.t_histogram.total_mass() - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): Rayon-based trial parallelism via
//!   `SimulationEngine::run_parallel`
//! - `serde`: Serialisation support for simulation results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod rng;
pub mod sampler;
pub mod sim;
pub mod trial;

pub use rng::{RandomSource, ReplaySource, SeededSource};
pub use sampler::BoxMuller;
pub use sim::{
    RecomputeSession, SimulationConfig, SimulationEngine, SimulationResult, StatisticSample,
};
pub use trial::{generate_trial, Trial};
