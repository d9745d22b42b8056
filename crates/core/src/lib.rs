//! Core traits and types for rootscan.
//!
//! This crate defines the shared abstractions that the solvers and observers
//! build on:
//!
//! - [`Function`]: a deterministic scalar function that may fail to evaluate
//! - [`from_fn`], [`try_from_fn`]: adapters that turn closures into functions
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::{FromFn, TryFromFn, from_fn, try_from_fn};
pub use {function::Function, observer::Observer};
