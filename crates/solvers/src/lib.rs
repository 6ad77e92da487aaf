//! Numerical solvers for the Amoeba optimization crates.
//!
//! # Modules
//!
//! - [`optimization`] — derivative-free minimization and maximization,
//!   including the [Nelder-Mead simplex method](optimization::nelder_mead)

pub mod optimization;
