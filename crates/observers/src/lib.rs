//! Reusable observers for the Amoeba Nelder-Mead solver.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! plug into the solver's event protocol.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for solver-agnostic observers
//!   ([`HasObjective`], [`CanStopEarly`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`LogObserver`] — Reports progress as structured `tracing` events.
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing convergence via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: amoeba_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

mod log;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

pub use log::LogObserver;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
