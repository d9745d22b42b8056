/// Current bisection bracket and the function value at its lower bound.
///
/// The upper value is never needed: a midpoint replaces the upper bound only
/// when its value has the opposite strict sign to the lower value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    lower: f64,
    upper: f64,
    lower_value: f64,
}

impl Bracket {
    pub(super) fn new(lower: f64, upper: f64, lower_value: f64) -> Self {
        Self {
            lower,
            upper,
            lower_value,
        }
    }

    /// Returns the bracket bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Keeps the half whose endpoint values straddle a strict sign change.
    ///
    /// A product of exactly zero does not straddle, so the lower bound moves.
    pub(super) fn shrink(&mut self, x: f64, value: f64) {
        if self.lower_value * value < 0.0 {
            self.upper = x;
        } else {
            self.lower = x;
            self.lower_value = value;
        }
    }
}
