//! Structured logging of solver progress through `tracing`.

use amoeba_core::{Model, Observer, OptimizationProblem};
use amoeba_solvers::optimization::nelder_mead::Event;

/// An observer that reports every Nelder-Mead event as a `tracing` event.
///
/// | Event | Level | Fields |
/// |-------|-------|--------|
/// | `Ranked` | `INFO` | `iter`, `stalled_iters`, `best`, `worst`, `x` |
/// | `Evaluated` | `DEBUG` | `phase`, `x`, `objective` |
/// | `ModelFailed`, `ProblemFailed` | `WARN` | `phase`, `x`, `error` |
///
/// `best` and `worst` are objectives of the ranked simplex and `x` on a
/// ranking is the best point. The observer never returns an action.
///
/// Install a subscriber (for example `tracing_subscriber::fmt::init()`) to see
/// the output.
///
/// # Example
///
/// ```
/// use amoeba_observers::LogObserver;
/// use amoeba_solvers::optimization::{ObjectiveFn, nelder_mead};
///
/// let f = ObjectiveFn::new(|x: &[f64; 2]| x[0].powi(2) + x[1].powi(2));
/// let solution =
///     nelder_mead::minimize(&f, &f, [1.0, 1.0], &nelder_mead::Config::default(), LogObserver)
///         .unwrap();
///
/// assert!(solution.objective < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl<M, P, A, const N: usize> Observer<Event<'_, M, P, N>, A> for LogObserver
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn observe(&mut self, event: &Event<'_, M, P, N>) -> Option<A> {
        match event {
            Event::Ranked {
                iter,
                stalled_iters,
                simplex,
            } => {
                tracing::info!(
                    iter,
                    stalled_iters,
                    best = simplex.best().objective,
                    worst = simplex.worst().objective,
                    x = ?simplex.best().x,
                    "simplex ranked"
                );
            }
            Event::Evaluated {
                phase, x, objective, ..
            } => {
                tracing::debug!(?phase, ?x, objective, "evaluated");
            }
            Event::ModelFailed { phase, x, error } => {
                tracing::warn!(?phase, ?x, %error, "model failed");
            }
            Event::ProblemFailed { phase, x, error } => {
                tracing::warn!(?phase, ?x, %error, "problem failed");
            }
        }
        None
    }
}
