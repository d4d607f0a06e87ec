//! Seeded pseudo-random source backed by `rand::StdRng`.

use rand::distributions::Open01;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::source::{RandomSource, SourceFactory};

/// Reproducible uniform source.
///
/// # Examples
///
/// ```rust
/// use sampdist_engine::rng::{RandomSource, SeededSource};
///
/// let mut a = SeededSource::from_seed(42);
/// let mut b = SeededSource::from_seed(42);
/// assert_eq!(a.next_uniform(), b.next_uniform());
/// assert_eq!(a.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct SeededSource {
    inner: StdRng,
    /// Seed used for initialisation; `None` when seeded from the OS.
    seed: Option<u64>,
}

impl SeededSource {
    /// Creates a source initialised with `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Returns the seed used for initialisation, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RandomSource for SeededSource {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.inner.sample(Open01)
    }
}

/// Derives a chunk seed from a base seed (SplitMix64 finaliser).
#[inline]
fn mix_seed(base: u64, chunk: usize) -> u64 {
    let mut z = base.wrapping_add((chunk as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Hands each parallel chunk a [`SeededSource`] with its own derived seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeededFactory {
    base_seed: u64,
}

impl SeededFactory {
    /// Creates a factory deriving all chunk seeds from `base_seed`.
    #[inline]
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Creates a factory with a base seed drawn from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The base seed.
    #[inline]
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }
}

impl SourceFactory for SeededFactory {
    type Source = SeededSource;

    fn create(&self, chunk: usize) -> SeededSource {
        SeededSource::from_seed(mix_seed(self.base_seed, chunk))
    }
}
