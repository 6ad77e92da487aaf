use amoeba_core::{Model, Observer, OptimizationProblem};

use crate::optimization::evaluate;

use super::{Action, Error, Event, Phase, Simplex, Vertex, goal::Goal};

/// Outcome of asking the context for a vertex.
pub(super) enum Probe<V> {
    /// The point was scored, for real or by an `AssumeWorse` action.
    Scored(V),

    /// The observer asked the solver to stop.
    StopEarly,
}

impl<V> Probe<V> {
    /// Returns the scored value, or `None` if the observer stopped the search.
    pub(super) fn scored(self) -> Option<V> {
        match self {
            Self::Scored(value) => Some(value),
            Self::StopEarly => None,
        }
    }
}

/// Everything needed to turn a point into a vertex and report it.
///
/// Counts every evaluation attempt, including failed ones.
pub(super) struct EvalContext<'ctx, M, P, Obs> {
    model: &'ctx M,
    problem: &'ctx P,
    observer: &'ctx mut Obs,
    goal: Goal,
    evals: usize,
}

impl<'ctx, M, P, Obs> EvalContext<'ctx, M, P, Obs> {
    pub(super) fn new(
        model: &'ctx M,
        problem: &'ctx P,
        observer: &'ctx mut Obs,
        goal: Goal,
    ) -> Self {
        Self {
            model,
            problem,
            observer,
            goal,
            evals: 0,
        }
    }

    pub(super) fn evals(&self) -> usize {
        self.evals
    }

    /// Scores `x`, emits the matching event, and applies the observer's action.
    ///
    /// # Errors
    ///
    /// Returns the evaluation error when evaluation fails and the observer
    /// neither stops the search nor assumes the point is worse.
    pub(super) fn vertex<const N: usize>(
        &mut self,
        phase: Phase,
        x: [f64; N],
    ) -> Result<Probe<Vertex<M::Input, M::Output, N>>, Error>
    where
        M: Model,
        P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
        Obs: for<'evt> Observer<Event<'evt, M, P, N>, Action>,
    {
        self.evals += 1;

        match evaluate(self.model, self.problem, x) {
            Ok(eval) => {
                let event = Event::Evaluated {
                    phase,
                    x,
                    objective: eval.objective,
                    input: &eval.snapshot.input,
                    output: &eval.snapshot.output,
                };
                let action = self.observer.observe(&event);
                match action {
                    Some(Action::StopEarly) => Ok(Probe::StopEarly),
                    Some(Action::AssumeWorse) => {
                        Ok(Probe::Scored(Vertex::assumed_worse(x, self.goal)))
                    }
                    None => Ok(Probe::Scored(Vertex::evaluated(eval, self.goal))),
                }
            }
            Err(error) => {
                let action =
                    Event::<M, P, N>::emit_failure(phase, x, &error, &mut *self.observer);
                match action {
                    Some(Action::StopEarly) => Ok(Probe::StopEarly),
                    Some(Action::AssumeWorse) => {
                        Ok(Probe::Scored(Vertex::assumed_worse(x, self.goal)))
                    }
                    None => Err(error.into()),
                }
            }
        }
    }

    /// Emits a ranking event and returns the observer's action.
    pub(super) fn ranked<const N: usize>(
        &mut self,
        iter: usize,
        stalled_iters: usize,
        simplex: &Simplex<M::Input, M::Output, N>,
    ) -> Option<Action>
    where
        M: Model,
        P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
        Obs: for<'evt> Observer<Event<'evt, M, P, N>, Action>,
    {
        let event = Event::Ranked {
            iter,
            stalled_iters,
            simplex,
        };
        self.observer.observe(&event)
    }
}
