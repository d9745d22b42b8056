//! Fixed-step scan for every root in an interval.
//!
//! # Algorithm
//!
//! The scanner walks `[x_min, x_max]` left to right in cells of width `step`
//! (the last cell is clipped to `x_max`). A cell whose endpoint values have a
//! product `<= 0` is refined with [`bisection`](crate::bisection). A root
//! within `tol` of an already accepted root is discarded as a duplicate;
//! otherwise it is appended to the report.
//!
//! # Limitations
//!
//! Each cell is visited exactly once, so two roots closer together than
//! `step` can both be missed when their sign changes cancel, and a function
//! that touches zero without crossing is only found if a grid point happens
//! to land on the touch. Shrinking `step` is the only remedy.
//!
//! # Undefined Points
//!
//! If the function fails to evaluate anywhere, the scanner emits
//! [`Event::EvalFailed`]. Without an observer action the scan aborts with
//! [`Error::Function`]; returning [`Action::SkipCell`] skips the cell and
//! keeps scanning.

mod action;
mod config;
mod error;
mod event;
mod grid;
mod report;
mod roots;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use grid::Cell;
pub use report::{Report, Status};
pub use roots::Root;

use std::error::Error as StdError;

use rootscan_core::{Function, Observer};

use crate::bisection;

use grid::Grid;
use roots::Roots;

/// Finds every root of `function` in `range` that the fixed-step scan detects.
///
/// The observer receives an [`Event`] for each notable step of the scan.
/// See the [module docs](self) for the algorithm and its blind spots.
///
/// An empty or reversed range is not an error: no cells are scanned and the
/// report states that no roots were found.
///
/// # Errors
///
/// Returns an error if either bound of `range` is non-finite, if `step` is
/// too small to advance past some grid point, or if the function fails to
/// evaluate and the observer does not return an [`Action`] in response.
pub fn find_all_roots<F, Obs>(
    function: &F,
    range: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Report, Error>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if let Some(&value) = range.iter().find(|value| !value.is_finite()) {
        return Err(Error::NonFiniteRange { value });
    }

    let mut scanner = Scanner {
        function,
        config,
        observer,
        roots: Roots::new(config.tol()),
        last: None,
        failed: None,
    };

    for cell in Grid::new(range, config.step()) {
        match scanner.scan_cell(cell?) {
            Ok(()) | Err(Interrupt::Skip) => {}
            Err(Interrupt::Stop) => {
                let roots = scanner.roots.into_vec();
                return Ok(Report::new(Status::StoppedByObserver, range, roots));
            }
            Err(Interrupt::Fail(err)) => return Err(err),
        }
    }

    Ok(Report::new(
        Status::Completed,
        range,
        scanner.roots.into_vec(),
    ))
}

/// Finds every root in `range` without observer support.
///
/// This is a convenience wrapper around [`find_all_roots`] that uses a no-op
/// observer, so any function evaluation failure aborts the scan.
///
/// # Errors
///
/// Returns the same errors as [`find_all_roots`].
pub fn find_all_roots_unobserved<F: Function>(
    function: &F,
    range: [f64; 2],
    config: &Config,
) -> Result<Report, Error> {
    find_all_roots(function, range, config, ())
}

/// Why processing of a cell ended early.
enum Interrupt {
    Skip,
    Stop,
    Fail(Error),
}

impl From<Error> for Interrupt {
    fn from(err: Error) -> Self {
        Self::Fail(err)
    }
}

impl From<Action> for Interrupt {
    fn from(action: Action) -> Self {
        match action {
            Action::SkipCell => Self::Skip,
            Action::StopEarly => Self::Stop,
        }
    }
}

/// A function value at a grid point.
#[derive(Debug, Clone, Copy)]
struct Sample {
    x: f64,
    value: f64,
}

struct Scanner<'s, F, Obs> {
    function: &'s F,
    config: &'s Config,
    observer: Obs,
    roots: Roots,
    /// Upper bound of the previous cell, reused as the next lower bound.
    last: Option<Sample>,
    /// Grid point whose evaluation failed and was skipped.
    failed: Option<f64>,
}

impl<F, Obs> Scanner<'_, F, Obs>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    fn scan_cell(&mut self, cell: Cell) -> Result<(), Interrupt> {
        let lower_value = self.value_at(cell.lower)?;
        let upper_value = self.value_at(cell.upper)?;
        self.last = Some(Sample {
            x: cell.upper,
            value: upper_value,
        });

        // NaN products are not sign changes.
        let has_sign_change = lower_value * upper_value <= 0.0;
        if !has_sign_change {
            return Ok(());
        }
        self.emit(&Event::SignChange {
            cell,
            values: [lower_value, upper_value],
        })?;

        let solution = match bisection::solve_unobserved(
            self.function,
            cell.as_array(),
            &self.config.bisection(),
        ) {
            Ok(solution) => solution,
            Err(bisection::Error::Function { x, source }) => return Err(self.recover(x, source)),
            Err(err) => return Err(Error::from(err).into()),
        };
        self.emit(&Event::Refined {
            cell,
            solution: &solution,
        })?;

        let Some(root) = Root::from_solution(&solution) else {
            return Ok(());
        };

        if let Some(existing) = self.roots.duplicate_of(root.x) {
            return self.emit(&Event::Duplicate {
                x: root.x,
                existing,
            });
        }

        self.emit(&Event::Accepted {
            index: self.roots.len(),
            root: &root,
        })?;
        self.roots.push(root);
        Ok(())
    }

    /// Evaluates the function at a grid point, reusing the previous cell's upper value.
    ///
    /// A grid point that already failed is skipped without calling the
    /// function or reporting the failure again.
    #[allow(clippy::float_cmp)]
    fn value_at(&mut self, x: f64) -> Result<f64, Interrupt> {
        if let Some(sample) = self.last
            && sample.x == x
        {
            return Ok(sample.value);
        }
        if self.failed == Some(x) {
            return Err(Interrupt::Skip);
        }

        self.function.call(x).map_err(|err| {
            self.failed = Some(x);
            self.recover(x, Box::new(err))
        })
    }

    /// Reports a failed evaluation and converts the observer's answer into an interrupt.
    fn recover(&mut self, x: f64, error: Box<dyn StdError + Send + Sync>) -> Interrupt {
        let event = Event::EvalFailed { x, error: &*error };
        match self.observer.observe(&event) {
            Some(action) => action.into(),
            None => Interrupt::Fail(Error::Function { x, source: error }),
        }
    }

    fn emit(&mut self, event: &Event<'_>) -> Result<(), Interrupt> {
        match self.observer.observe(event) {
            Some(action) => Err(action.into()),
            None => Ok(()),
        }
    }
}
