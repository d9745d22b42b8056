use std::convert::Infallible;

/// A scalar function of one real variable.
///
/// Functions must be deterministic, always producing the same result for a
/// given `x`. Solvers rely on this to reuse evaluations and to make repeated
/// scans reproducible.
///
/// Evaluation is fallible so that a function can report points where it is
/// undefined (for example, a fractional power of a negative number) instead
/// of returning `NaN`.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Each function defines its own `Error` type to represent domain failures.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<T: Function + ?Sized> Function for &T {
    type Error = T::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).call(x)
    }
}

/// A [`Function`] backed by an infallible closure.
///
/// Created by [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F> {
    function: F,
}

/// Wraps an infallible closure as a [`Function`].
///
/// ```
/// use rootscan_core::{Function, from_fn};
///
/// let square = from_fn(|x| x * x);
/// assert_eq!(square.call(3.0), Ok(9.0));
/// ```
pub const fn from_fn<F>(function: F) -> FromFn<F>
where
    F: Fn(f64) -> f64,
{
    FromFn { function }
}

impl<F> Function for FromFn<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.function)(x))
    }
}

/// A [`Function`] backed by a fallible closure.
///
/// Created by [`try_from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct TryFromFn<F> {
    function: F,
}

/// Wraps a closure returning `Result<f64, E>` as a [`Function`].
pub const fn try_from_fn<F, E>(function: F) -> TryFromFn<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    TryFromFn { function }
}

impl<F, E> Function for TryFromFn<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (self.function)(x)
    }
}
