//! Monte Carlo simulation of the sampling distributions of x̄ and s².
//!
//! # Architecture
//!
//! ```text
//! SimulationEngine
//! ├── SimulationConfig  (trial count, bin count, pair reuse)
//! ├── BoxMuller         (normal sampling from a RandomSource)
//! ├── generate_trial()  (x̄, s² per batch of n draws)
//! └── summarise()
//!     ├── t  = (x̄ − μ) / √(s²/n)   → Histogram
//!     └── χ² = (n − 1)·s² / σ²      → Histogram
//!
//! RecomputeSession      (latest-result-wins delivery)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sampdist_core::DistributionSpec;
//! use sampdist_engine::rng::SeededSource;
//! use sampdist_engine::sim::{SimulationConfig, SimulationEngine};
//!
//! let engine = SimulationEngine::new(
//!     SimulationConfig::builder().simulation_count(2_000).build().unwrap(),
//! );
//!
//! let result = engine
//!     .recompute(DistributionSpec::parse("N(0,1)"), 15, SeededSource::from_seed(42))
//!     .unwrap();
//!
//! for ((x, pdf), bin) in result.t_overlay().iter().zip(result.t_histogram.bins()) {
//!     assert_eq!(*x, bin.center);
//!     assert!(*pdf >= 0.0);
//! }
//! ```

pub mod config;
pub mod engine;
pub mod session;

pub use config::{SimulationConfig, SimulationConfigBuilder, SIMULATION_COUNT};
#[cfg(feature = "parallel")]
pub use engine::TRIALS_PER_CHUNK;
pub use engine::{SimulationEngine, SimulationResult, StatisticSample};
pub use session::{RecomputeSession, Ticket};
