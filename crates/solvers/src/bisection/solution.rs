use std::fmt;

/// Why the bisection solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The lower bound was already within tolerance of zero.
    LowerBound,
    /// The upper bound was already within tolerance of zero.
    UpperBound,
    /// Both endpoint values have the same strict sign.
    NoSignChange,
    /// A midpoint was found within tolerance of zero.
    Converged,
    /// Reached the iteration limit; the last midpoint is reported.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Status {
    /// Returns true if the reported root satisfies `|f(root)| < tol`.
    #[must_use]
    pub fn is_converged(self) -> bool {
        matches!(self, Self::LowerBound | Self::UpperBound | Self::Converged)
    }
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Root estimate, absent only when the bracket has no sign change.
    pub root: Option<f64>,
    /// Number of halvings performed.
    pub iters: usize,
}

impl Solution {
    pub(super) fn endpoint(status: Status, x: f64) -> Self {
        Self {
            status,
            root: Some(x),
            iters: 0,
        }
    }

    pub(super) fn no_sign_change() -> Self {
        Self {
            status: Status::NoSignChange,
            root: None,
            iters: 0,
        }
    }

    pub(super) fn midpoint(status: Status, x: f64, iters: usize) -> Self {
        Self {
            status,
            root: Some(x),
            iters,
        }
    }
}

/// Renders the human-readable reason the solver stopped.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Status::LowerBound => f.write_str("Root found at lower bound."),
            Status::UpperBound => f.write_str("Root found at upper bound."),
            Status::NoSignChange => {
                f.write_str("No root found: function has same sign at endpoints.")
            }
            Status::Converged => write!(f, "Converged after {} iterations", self.iters),
            Status::MaxIters => f.write_str("Maximum iterations reached"),
            Status::StoppedByObserver => {
                write!(f, "Stopped by observer after {} iterations", self.iters)
            }
        }
    }
}
