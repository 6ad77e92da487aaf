//! Capability traits for solver-agnostic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once against the capability it needs.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//! - [`CanAssumeWorse`] — actions that can signal a worse-than-evaluated outcome
//!
//! # Example
//!
//! ```rust
//! use amoeba_core::Observer;
//! use amoeba_observers::traits::{CanStopEarly, HasObjective};
//!
//! /// Stops once any event reports an objective below the target.
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() < self.target).then(A::stop_early)
//!     }
//! }
//! ```

use amoeba_core::{Model, OptimizationProblem};

use amoeba_solvers::optimization::nelder_mead;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no objective
    /// is available.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can signal a worse-than-evaluated outcome.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as worse than any other.
    fn assume_worse() -> Self;
}

// --- HasObjective for nelder_mead::Event ---

/// Ranking events report the objective of the current best vertex.
impl<M, P, const N: usize> HasObjective for nelder_mead::Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn objective(&self) -> f64 {
        match self {
            nelder_mead::Event::Ranked { simplex, .. } => simplex.best().objective,
            nelder_mead::Event::Evaluated { objective, .. } => *objective,
            nelder_mead::Event::ModelFailed { .. } | nelder_mead::Event::ProblemFailed { .. } => {
                f64::NAN
            }
        }
    }
}

// --- Action impls ---

impl CanStopEarly for nelder_mead::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeWorse for nelder_mead::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}
