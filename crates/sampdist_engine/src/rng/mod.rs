//! # Uniform Randomness for the Simulation Engine
//!
//! Everything random in the engine is derived from independent uniform
//! draws on the **open** interval (0, 1). Excluding 0 keeps `ln(u)` in the
//! Box–Muller transform finite; excluding 1 keeps the radius non-zero.
//!
//! ## Module Structure
//!
//! - [`RandomSource`]: the seam through which uniform draws enter the engine
//! - [`SeededSource`]: `rand::StdRng` wrapper, reproducible from a 64-bit seed
//! - [`ReplaySource`]: replays a fixed sequence, for deterministic tests
//! - [`SourceFactory`]: builds one independent source per parallel chunk
//!
//! ## Usage Example
//!
//! ```rust
//! use sampdist_engine::rng::{RandomSource, ReplaySource, SeededSource};
//!
//! let mut rng = SeededSource::from_seed(12345);
//! let u = rng.next_uniform();
//! assert!(u > 0.0 && u < 1.0);
//!
//! let mut fixed = ReplaySource::new(vec![0.5, 0.25]).unwrap();
//! assert_eq!(fixed.next_uniform(), 0.5);
//! assert_eq!(fixed.next_uniform(), 0.25);
//! assert_eq!(fixed.next_uniform(), 0.5);
//! ```

mod replay;
mod seeded;
mod source;

pub use replay::ReplaySource;
pub use seeded::{SeededFactory, SeededSource};
pub use source::{RandomSource, SourceFactory};

#[cfg(test)]
mod tests;
