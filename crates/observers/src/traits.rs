//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across the bisection solver and the scanner.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a function value
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//! - [`CanSkipCell`]: actions that can abandon the current scan cell
//!
//! # Example
//!
//! ```rust
//! use rootscan_core::Observer;
//! use rootscan_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use rootscan_solvers::{bisection, scan};

/// An event that carries a function value.
pub trait HasResidual {
    /// Returns the function value for this event.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can abandon the current scan cell.
pub trait CanSkipCell {
    /// Returns the action that skips the current cell.
    fn skip_cell() -> Self;
}

// --- HasResidual for bisection::Event ---

impl HasResidual for bisection::Event {
    fn residual(&self) -> f64 {
        self.value
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for scan::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- CanSkipCell for scan::Action ---

impl CanSkipCell for scan::Action {
    fn skip_cell() -> Self {
        Self::SkipCell
    }
}
