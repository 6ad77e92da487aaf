use amoeba_core::{Model, Observer, OptimizationProblem};

use crate::optimization::EvalError;

use super::{Action, Simplex};

/// The step of the algorithm that requested an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Scoring the start point or one of its per-axis offsets.
    Init,

    /// Scoring the reflection of the worst vertex through the centroid.
    Reflect,

    /// Scoring the point beyond a reflection that beat the best vertex.
    Expand,

    /// Scoring a point between the centroid and the worst vertex.
    Contract,

    /// Rescoring a vertex after shrinking toward the best vertex.
    Shrink,
}

/// Events emitted by the Nelder-Mead solver.
///
/// Every objective evaluation produces exactly one of [`Event::Evaluated`],
/// [`Event::ModelFailed`], or [`Event::ProblemFailed`]. Every ranking pass,
/// including the one on which the search terminates, produces one
/// [`Event::Ranked`].
pub enum Event<'a, M, P, const N: usize>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// The simplex was sorted at the start of an iteration.
    Ranked {
        /// Number of completed iterations.
        iter: usize,

        /// Consecutive iterations without sufficient improvement, counting this one.
        stalled_iters: usize,

        /// The ranked simplex, best vertex first.
        simplex: &'a Simplex<M::Input, M::Output, N>,
    },

    /// Successful evaluation of a point.
    Evaluated {
        /// The step that requested the evaluation.
        phase: Phase,

        /// The evaluated point.
        x: [f64; N],

        /// The objective value at `x`.
        objective: f64,

        /// The model input at this point.
        input: &'a M::Input,

        /// The model output at this point.
        output: &'a M::Output,
    },

    /// Model evaluation failed.
    ModelFailed {
        /// The step that requested the evaluation.
        phase: Phase,

        /// The point where evaluation failed.
        x: [f64; N],

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or objective computation).
    ProblemFailed {
        /// The step that requested the evaluation.
        phase: Phase,

        /// The point where evaluation failed.
        x: [f64; N],

        /// The problem error.
        error: &'a P::Error,
    },
}

impl<M, P, const N: usize> Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Returns the point that was evaluated (or attempted).
    ///
    /// Returns `None` for [`Event::Ranked`].
    #[must_use]
    pub fn x(&self) -> Option<&[f64; N]> {
        match self {
            Self::Ranked { .. } => None,
            Self::Evaluated { x, .. }
            | Self::ModelFailed { x, .. }
            | Self::ProblemFailed { x, .. } => Some(x),
        }
    }

    /// Returns the step that requested the evaluation.
    ///
    /// Returns `None` for [`Event::Ranked`].
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::Ranked { .. } => None,
            Self::Evaluated { phase, .. }
            | Self::ModelFailed { phase, .. }
            | Self::ProblemFailed { phase, .. } => Some(*phase),
        }
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        phase: Phase,
        x: [f64; N],
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed { phase, x, error: e };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed { phase, x, error: e };
                observer.observe(&event)
            }
        }
    }
}
