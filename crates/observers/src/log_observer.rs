use log::{Level, debug, log, trace, warn};

use rootscan_core::Observer;
use rootscan_solvers::{bisection, scan};

/// Forwards solver events to the [`log`] facade.
///
/// Accepted roots are logged at a configurable level (`Info` by default),
/// duplicates at `Debug`, evaluation failures at `Warn`, and per-iteration or
/// per-cell detail at `Trace`. The observer never returns an action, so it
/// can be used wherever a no-op observer would be.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    root_level: Level,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl LogObserver {
    /// Creates an observer that logs accepted roots at `root_level`.
    #[must_use]
    pub fn new(root_level: Level) -> Self {
        Self { root_level }
    }
}

impl<A> Observer<bisection::Event, A> for LogObserver {
    fn observe(&mut self, event: &bisection::Event) -> Option<A> {
        let [lower, upper] = event.bracket;
        trace!(
            "bisection iter {}: [{lower}, {upper}] f({}) = {:e}",
            event.iter, event.x, event.value
        );
        None
    }
}

impl<A> Observer<scan::Event<'_>, A> for LogObserver {
    fn observe(&mut self, event: &scan::Event<'_>) -> Option<A> {
        match event {
            scan::Event::SignChange { cell, values } => trace!(
                "sign change on [{}, {}]: f = [{:e}, {:e}]",
                cell.lower, cell.upper, values[0], values[1]
            ),
            scan::Event::Refined { cell, solution } => {
                trace!("refined [{}, {}]: {solution}", cell.lower, cell.upper);
            }
            scan::Event::Duplicate { x, existing } => {
                debug!("discarded root at x = {x:.8}, duplicates x = {existing:.8}");
            }
            scan::Event::Accepted { index, root } => log!(
                self.root_level,
                "root {}: x = {:.8} ({root})",
                index + 1,
                root.x
            ),
            scan::Event::EvalFailed { x, error } => {
                warn!("evaluation failed at x = {x}: {error}");
            }
        }
        None
    }
}
