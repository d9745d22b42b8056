//! Reusable observers for the rootscan solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the bisection solver and the root scanner.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasResidual`], [`CanStopEarly`], [`CanSkipCell`])
//!
//! # Observers
//!
//! - [`LogObserver`]: forwards solver events to the [`log`] facade
//! - [`SkipUndefined`]: recovers from function evaluation failures by
//!   skipping the affected scan cells
//!
//! [`Observer`]: rootscan_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanSkipCell`]: traits::CanSkipCell

pub mod traits;

mod log_observer;
mod skip;

pub use log_observer::LogObserver;
pub use skip::SkipUndefined;
