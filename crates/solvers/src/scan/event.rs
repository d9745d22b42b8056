use std::error::Error as StdError;

use crate::bisection::Solution;

use super::{Cell, Root};

/// Events emitted by the root scanner.
///
/// Within a cell, events arrive in the order listed here. Any event can be
/// answered with an [`Action`](super::Action); skipping a cell after
/// [`Event::Duplicate`] has no further effect.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// The function values at the cell bounds have a product `<= 0`.
    SignChange {
        /// The flagged cell.
        cell: Cell,
        /// Function values at the lower and upper bounds.
        values: [f64; 2],
    },

    /// Bisection finished on a flagged cell.
    Refined {
        /// The refined cell.
        cell: Cell,
        /// The bisection result, which may carry no root.
        solution: &'a Solution,
    },

    /// A root was discarded because it lies within tolerance of an accepted root.
    Duplicate {
        /// The discarded root.
        x: f64,
        /// The previously accepted root it duplicates.
        existing: f64,
    },

    /// A new root is about to be accepted.
    Accepted {
        /// Zero-based position the root will take in the report.
        index: usize,
        /// The root record.
        root: &'a Root,
    },

    /// The function failed to evaluate at `x`.
    ///
    /// Unless the observer returns an action, the scan aborts with
    /// [`Error::Function`](super::Error::Function).
    EvalFailed {
        /// The x value where evaluation failed.
        x: f64,
        /// The function's error.
        error: &'a (dyn StdError + Send + Sync + 'static),
    },
}

impl Event<'_> {
    /// Returns the x value this event refers to, if it refers to a single point.
    #[must_use]
    pub fn x(&self) -> Option<f64> {
        match self {
            Self::SignChange { .. } => None,
            Self::Refined { solution, .. } => solution.root,
            Self::Duplicate { x, .. } | Self::EvalFailed { x, .. } => Some(*x),
            Self::Accepted { root, .. } => Some(root.x),
        }
    }
}
