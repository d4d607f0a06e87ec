//! # sampdist_core: Mathematical Foundation for Sampling-Distribution Simulation
//!
//! ## Layer 1 (Foundation) Role
//!
//! sampdist_core is the bottom layer of the workspace, providing:
//! - Gamma function via the Lanczos approximation (`special`)
//! - Theoretical densities: standard normal, Student's t, chi-squared (`densities`)
//! - Equal-width histogram binning with density normalisation (`histogram`)
//! - Normal population specification parsed from `N(mean,variance)` (`distribution`)
//! - Error types: `SamplingError` (`error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other sampdist_* crates and no random
//! number generation; everything here is deterministic and side-effect free.
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampdist_core::densities::{standard_normal, theoretical_t};
//! use sampdist_core::histogram::build;
//! use sampdist_core::special::gamma;
//!
//! // Γ(5) = 4! = 24
//! let g = gamma(5.0).unwrap();
//! assert!((g - 24.0).abs() < 1e-10);
//!
//! // Student's t with many degrees of freedom is close to the standard normal
//! let diff = (theoretical_t(0.0, 200) - standard_normal(0.0)).abs();
//! assert!(diff < 1e-2);
//!
//! // Bin a handful of values into two bins
//! let histogram = build(&[0.0, 1.0, 2.0, 3.0], 2).unwrap();
//! assert_eq!(histogram.bins().len(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for histograms and distribution specs

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod densities;
pub mod distribution;
pub mod error;
pub mod histogram;
pub mod special;

pub use distribution::DistributionSpec;
pub use error::{SamplingError, SamplingResult};
pub use histogram::{Histogram, HistogramBin};
