/// Iteration event emitted by the bisection solver.
///
/// One event is emitted per midpoint evaluation, before the convergence check
/// and before the bracket is narrowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,
    /// Bracket that was halved to produce the midpoint.
    pub bracket: [f64; 2],
    /// The midpoint.
    pub x: f64,
    /// Function value at the midpoint.
    pub value: f64,
}

impl Event {
    /// Returns the width of the bracket at this iteration.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }
}
