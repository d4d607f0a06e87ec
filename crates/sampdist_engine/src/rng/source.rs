//! Randomness traits.

/// A supplier of independent uniform(0, 1) draws.
///
/// Implementations must never return exactly `0.0` or `1.0`.
pub trait RandomSource {
    /// Returns the next uniform draw in the open interval (0, 1).
    fn next_uniform(&mut self) -> f64;

    /// Fills `buffer` with uniform draws.
    #[inline]
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_uniform();
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Builds one independent [`RandomSource`] per unit of parallel work.
///
/// `create` must be deterministic in `chunk` for a run to be reproducible.
pub trait SourceFactory: Send + Sync {
    /// Source type handed to each chunk.
    type Source: RandomSource + Send;

    /// Creates the source for chunk index `chunk`.
    fn create(&self, chunk: usize) -> Self::Source;
}
