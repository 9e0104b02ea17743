//! Errors surfaced by the exchanger solver.

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while setting up or running a solve.
///
/// Iteration exhaustion is deliberately not an error: the solver returns
/// the best-effort profile with
/// [`ConvergenceStatus::MaxIterationsReached`](super::ConvergenceStatus::MaxIterationsReached)
/// and callers decide whether to trust it.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The exchanger must be discretized into at least one segment.
    #[error("segment count must be at least 1, got {segments}")]
    InvalidSegmentCount { segments: usize },

    /// A stream's heat-capacity rate (`ṁ·cp`) is zero, negative, or NaN,
    /// which would make the segment energy balance undefined.
    #[error("{side} stream heat-capacity rate is not strictly positive")]
    InvalidCapacityRate {
        /// Which stream failed validation, `"hot"` or `"cold"`.
        side: &'static str,

        #[source]
        source: ConstraintError,
    },
}
