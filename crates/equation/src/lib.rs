//! The equation `a·x^b = e^(c·x)·sin(w·x + v)`, posed as a root problem.
//!
//! [`PowerSine`] holds the five equation constants and implements
//! [`Function`](rootscan_core::Function) as the difference of the two sides,
//! `f(x) = a·x^b − e^(c·x)·sin(w·x + v)`, so the roots of `f` are the
//! solutions of the equation.

mod error;
mod power_sine;

pub use error::DomainError;
pub use power_sine::PowerSine;
