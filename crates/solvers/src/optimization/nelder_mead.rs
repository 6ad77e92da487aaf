//! Nelder-Mead simplex search for multi-variable optimization.
//!
//! # Algorithm
//!
//! The search keeps a simplex of `N + 1` scored vertices. It starts from the
//! given point plus one copy per axis offset by [`Config::step`]. Each
//! iteration ranks the vertices, then tries to replace the worst one with a
//! better point on the line through the worst vertex and the centroid of the
//! others:
//!
//! 1. **Reflect** through the centroid. Accept if it lands between the best
//!    and second-worst scores.
//! 2. **Expand** further if the reflection beat the best vertex, keeping
//!    whichever of the two is better.
//! 3. **Contract** toward the worst vertex. Accept if it beats the worst.
//! 4. **Shrink** every vertex halfway (by `sigma`) toward the best, rescoring
//!    all of them.
//!
//! The search ends when the best score has not improved by more than
//! [`Config::improvement_threshold`] for [`Config::max_stalled_iters`]
//! consecutive iterations, or when [`Config::max_iters`] iterations complete.
//! Either way the best vertex is returned; the [`Status`] records why.
//!
//! # When to Use
//!
//! Nelder-Mead is appropriate when:
//! - Derivatives are unavailable, unreliable, or expensive
//! - The objective is noisy or non-smooth
//! - There are a handful of variables (it degrades as `N` grows)
//!
//! # Limitations
//!
//! - **Unconstrained**: There are no bounds; use [`Action::AssumeWorse`] to
//!   steer away from invalid regions
//! - **Local**: Converges to a local optimum near the start point
//! - **No convergence guarantee**: Stagnation is a heuristic stopping rule
//!
//! # Observer Events
//!
//! - [`Event::Ranked`] — once per iteration after sorting, including the final
//!   one on which the search terminates
//! - [`Event::Evaluated`] — an evaluation succeeded
//! - [`Event::ModelFailed`] — the model returned an error
//! - [`Event::ProblemFailed`] — the problem returned an error (input or objective)
//!
//! Evaluation events carry the [`Phase`] that requested them.
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] on an evaluation event to score that point as worse
//! than any real evaluation.
//!
//! # Example
//!
//! ```
//! use amoeba_solvers::optimization::nelder_mead::{self, Config};
//!
//! let solution = nelder_mead::minimize_fn(
//!     |x: &[f64; 2]| (x[0] - 3.0).powi(2) + (x[1] + 2.0).powi(2),
//!     [0.0, 0.0],
//!     &Config::default(),
//! )
//! .unwrap();
//!
//! assert!((solution.x[0] - 3.0).abs() < 0.01);
//! assert!((solution.x[1] + 2.0).abs() < 0.01);
//! ```

mod action;
mod config;
mod error;
mod eval_context;
mod event;
mod goal;
mod init;
mod progress;
mod search;
mod simplex;
mod solution;
mod state;
mod vertex;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, Phase};
pub use simplex::Simplex;
pub use solution::{Solution, Status};
pub use vertex::Vertex;

use amoeba_core::{Model, Observer, OptimizationProblem};

use goal::Goal;
use search::search;

use super::ObjectiveFn;

/// Finds a minimum of the objective using the Nelder-Mead simplex method.
///
/// The observer receives an [`Event`] for every evaluation and every ranking
/// pass. See the [module docs](self) for details on events and actions.
///
/// # Errors
///
/// Returns an error if `N` is zero, or if the model or problem fails during
/// evaluation and the observer does not return an [`Action`] to recover.
pub fn minimize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    search(model, problem, x0, config, observer, Goal::Minimize)
}

/// Finds a minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `N` is zero or the model or problem fails during evaluation.
pub fn minimize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, x0, config, ())
}

/// Finds a maximum of the objective using the Nelder-Mead simplex method.
///
/// Objectives in events and in the returned [`Solution`] keep their original
/// sign.
///
/// # Errors
///
/// Returns an error if `N` is zero, or if the model or problem fails during
/// evaluation and the observer does not return an [`Action`] to recover.
pub fn maximize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    search(model, problem, x0, config, observer, Goal::Maximize)
}

/// Finds a maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `N` is zero or the model or problem fails during evaluation.
pub fn maximize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    maximize(model, problem, x0, config, ())
}

/// Finds a minimum of a plain function of the point.
///
/// Wraps `f` in an [`ObjectiveFn`] and runs [`minimize_unobserved`]. The
/// solution's snapshot holds the point and its objective.
///
/// # Errors
///
/// Returns [`Error::ZeroDimensions`] if `N` is zero.
pub fn minimize_fn<F, const N: usize>(
    f: F,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<[f64; N], f64, N>, Error>
where
    F: Fn(&[f64; N]) -> f64,
{
    let objective = ObjectiveFn::new(f);
    minimize_unobserved(&objective, &objective, x0, config)
}
