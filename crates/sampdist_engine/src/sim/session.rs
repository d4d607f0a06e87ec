//! Latest-result-wins recomputation.
//!
//! A caller that reacts to parameter changes (a new `n`, a new population)
//! starts a fresh computation for every change. Computations may finish in
//! any order; [`RecomputeSession`] makes sure only the one started last is
//! ever surfaced.
//!
//! ```text
//! begin() -> #1 ─────────────── publish(#1) ✗ (superseded)
//! begin() -> #2 ───── publish(#2) ✓
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use sampdist_core::{DistributionSpec, SamplingResult};

use super::engine::{SimulationEngine, SimulationResult};
use crate::rng::RandomSource;

/// Identifies one requested computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Sequence number of the request (1-based).
    #[inline]
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Holds the most recent [`SimulationResult`] and rejects stale ones.
///
/// # Examples
///
/// ```rust
/// use sampdist_core::DistributionSpec;
/// use sampdist_engine::rng::SeededSource;
/// use sampdist_engine::sim::{RecomputeSession, SimulationConfig, SimulationEngine};
///
/// let engine = SimulationEngine::new(
///     SimulationConfig::builder().simulation_count(500).build().unwrap(),
/// );
/// let session = RecomputeSession::new();
///
/// let stale = session.begin();
/// let fresh = session.begin();
///
/// let result = engine
///     .recompute(DistributionSpec::standard(), 5, SeededSource::from_seed(1))
///     .unwrap();
/// assert!(session.publish(stale, result.clone()).is_none());
/// assert!(session.publish(fresh, result).is_some());
/// assert_eq!(session.latest().unwrap().n, 5);
/// ```
#[derive(Debug, Default)]
pub struct RecomputeSession {
    issued: AtomicU64,
    published: Mutex<Option<(Ticket, Arc<SimulationResult>)>>,
}

impl RecomputeSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new request, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `ticket` is still the most recent request.
    ///
    /// Long-running callers may poll this to abandon superseded work early.
    #[inline]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::Acquire) == ticket.0
    }

    /// Stores `result` if `ticket` is still current and hands back the
    /// stored result.
    ///
    /// Returns `None`, discarding the result, when a newer request was
    /// issued in the meantime.
    pub fn publish(
        &self,
        ticket: Ticket,
        result: SimulationResult,
    ) -> Option<Arc<SimulationResult>> {
        let mut slot = self
            .published
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if !self.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, "Discarding superseded result");
            return None;
        }
        let result = Arc::new(result);
        *slot = Some((ticket, Arc::clone(&result)));
        Some(result)
    }

    /// The most recently published result.
    pub fn latest(&self) -> Option<Arc<SimulationResult>> {
        self.published
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|(_, result)| Arc::clone(result))
    }

    /// Ticket of the most recently published result.
    pub fn latest_ticket(&self) -> Option<Ticket> {
        self.published
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|(ticket, _)| *ticket)
    }

    /// Begins a request, runs it on `engine`, and publishes the outcome.
    ///
    /// Returns this request's own result, or `Ok(None)` when it was
    /// superseded before it finished.
    ///
    /// # Errors
    ///
    /// Propagates engine errors (`InvalidParameter` for `n < 2`).
    pub fn recompute<R: RandomSource>(
        &self,
        engine: &SimulationEngine,
        spec: DistributionSpec,
        n: usize,
        source: R,
    ) -> SamplingResult<Option<Arc<SimulationResult>>> {
        let ticket = self.begin();
        let result = engine.recompute(spec, n, source)?;
        Ok(self.publish(ticket, result))
    }
}
