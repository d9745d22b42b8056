//! Bisection for a single bracketed root.
//!
//! # Algorithm
//!
//! Given a bracket `[a, b]`, the solver first checks the endpoints: either
//! endpoint within tolerance of zero is accepted immediately, and endpoints
//! whose values share a strict sign are reported as having no root. Otherwise
//! it repeatedly evaluates the midpoint, accepts it if its value is within
//! tolerance of zero, and keeps the half whose endpoint values straddle a
//! strict sign change.
//!
//! Exhausting the iteration limit is a soft failure: the last midpoint is
//! still reported as the root, with [`Status::MaxIters`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint evaluation. Observers can
//! return [`Action::StopEarly`] to end the solve at that midpoint.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use rootscan_core::{Function, Observer};

use bracket::Bracket;

/// Finds a root of `function` within `bracket` using bisection.
///
/// The bracket must be ordered (`bracket[0] < bracket[1]`).
/// See the [module docs](self) for the stopping rules.
///
/// # Errors
///
/// Checked in this order:
/// - [`Error::InvalidBracket`] if `bracket[0] >= bracket[1]`
/// - [`Error::InvalidTolerance`] or [`Error::ZeroMaxIters`] if the config is invalid
/// - [`Error::NonFiniteBracket`] if either bound is infinite or NaN
/// - [`Error::Function`] if the function fails to evaluate at any point
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let [lower, upper] = bracket;
    if lower >= upper {
        return Err(Error::InvalidBracket { lower, upper });
    }

    config.validate()?;

    if let Some(&value) = bracket.iter().find(|value| !value.is_finite()) {
        return Err(Error::NonFiniteBracket { value });
    }

    let lower_value = evaluate(function, lower)?;
    let upper_value = evaluate(function, upper)?;

    if lower_value.abs() < config.tol {
        return Ok(Solution::endpoint(Status::LowerBound, lower));
    }
    if upper_value.abs() < config.tol {
        return Ok(Solution::endpoint(Status::UpperBound, upper));
    }
    if lower_value * upper_value > 0.0 {
        return Ok(Solution::no_sign_change());
    }

    let mut bracket = Bracket::new(lower, upper, lower_value);
    let mut x = bracket.midpoint();

    for iter in 1..=config.max_iters {
        x = bracket.midpoint();
        let value = evaluate(function, x)?;

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            x,
            value,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::midpoint(Status::StoppedByObserver, x, iter));
        }

        if value.abs() < config.tol {
            return Ok(Solution::midpoint(Status::Converged, x, iter));
        }

        bracket.shrink(x, value);
    }

    Ok(Solution::midpoint(Status::MaxIters, x, config.max_iters))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<F: Function>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(function, bracket, config, ())
}

fn evaluate<F: Function>(function: &F, x: f64) -> Result<f64, Error> {
    function.call(x).map_err(|err| Error::function(x, err))
}
