use rootscan_core::Observer;
use rootscan_solvers::scan::Event;

use crate::traits::CanSkipCell;

/// Skips every scan cell in which the function fails to evaluate.
///
/// Without an observer, the scanner aborts on the first evaluation failure.
/// `SkipUndefined` turns that into a recoverable condition and records where
/// the failures happened, so callers can scan functions that are undefined on
/// part of the range (for example, `x^0.5` over negative `x`).
#[derive(Debug, Clone, Default)]
pub struct SkipUndefined {
    failures: Vec<f64>,
}

impl SkipUndefined {
    /// Creates an observer with no recorded failures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the x values where evaluation failed, in scan order.
    #[must_use]
    pub fn failures(&self) -> &[f64] {
        &self.failures
    }
}

impl<A: CanSkipCell> Observer<Event<'_>, A> for SkipUndefined {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        match event {
            Event::EvalFailed { x, .. } => {
                self.failures.push(*x);
                Some(A::skip_cell())
            }
            _ => None,
        }
    }
}
