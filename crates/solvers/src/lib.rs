//! Root finders for scalar functions.
//!
//! - [`bisection`]: refines a single bracket with a sign change down to a root
//! - [`scan`]: walks a fixed-step grid over an interval, bisects every cell
//!   that shows a sign change, and collects the distinct roots
//!
//! Both solvers accept any [`Function`] and report progress to an
//! [`Observer`], which may also steer the solve through a solver-specific
//! action type.
//!
//! [`Function`]: rootscan_core::Function
//! [`Observer`]: rootscan_core::Observer

pub mod bisection;
pub mod scan;
