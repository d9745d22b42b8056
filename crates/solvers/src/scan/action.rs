/// Control actions supported by the root scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop scanning and return the roots accepted so far.
    ///
    /// The cell being processed contributes nothing to the report.
    StopEarly,

    /// Abandon the current cell and continue with the next one.
    ///
    /// Returned for [`Event::EvalFailed`], this recovers from a point where
    /// the function is undefined instead of aborting the scan. Returned for
    /// [`Event::Accepted`], it discards the candidate root.
    ///
    /// [`Event::EvalFailed`]: super::Event::EvalFailed
    /// [`Event::Accepted`]: super::Event::Accepted
    SkipCell,
}
