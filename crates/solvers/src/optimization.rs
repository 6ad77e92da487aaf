//! Solvers for optimization problems: minimizing or maximizing an objective.
//!
//! An [`OptimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` that minimizes or maximizes that objective.
//!
//! A plain closure `Fn(&[f64; N]) -> f64` can stand in for the model/problem
//! pair via [`ObjectiveFn`].
//!
//! # Solvers
//!
//! - [`nelder_mead`] — derivative-free simplex search over `N` unbounded
//!   variables for expensive, noisy, or non-differentiable objectives
//!
//! [`OptimizationProblem`]: amoeba_core::OptimizationProblem

mod evaluate;
mod objective_fn;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use objective_fn::ObjectiveFn;

pub mod nelder_mead;
