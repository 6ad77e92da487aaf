use amoeba_core::Snapshot;

use super::{Error, Vertex};

/// Indicates which termination condition ended the search.
///
/// None of these means failure: the search always reports its best vertex,
/// and judging whether that vertex is good enough is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The best score stopped improving by more than the threshold.
    Stalled,

    /// Reached the iteration limit.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Nelder-Mead search.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Best point found.
    pub x: [f64; N],

    /// Objective value at the reported x.
    pub objective: f64,

    /// Snapshot at the reported x.
    pub snapshot: Snapshot<I, O>,

    /// Number of completed iterations.
    pub iters: usize,

    /// Number of objective evaluations attempted, including failures.
    pub evals: usize,
}

impl<I, O, const N: usize> Solution<I, O, N> {
    /// Builds a solution from the vertex being reported.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuccessfulEvaluation`] if the vertex was never
    /// actually evaluated.
    pub(super) fn from_vertex(
        vertex: Vertex<I, O, N>,
        status: Status,
        iters: usize,
        evals: usize,
    ) -> Result<Self, Error> {
        let snapshot = vertex.snapshot.ok_or(Error::NoSuccessfulEvaluation)?;
        Ok(Self {
            status,
            x: vertex.x,
            objective: vertex.objective,
            snapshot,
            iters,
            evals,
        })
    }
}
