use std::fmt;

use rootscan_core::Function;

use crate::DomainError;

/// The constants of `a·x^b = e^(c·x)·sin(w·x + v)`.
///
/// As a [`Function`], evaluates the residual `a·x^b − e^(c·x)·sin(w·x + v)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerSine {
    /// Multiplicative constant of the power term.
    pub a: f64,
    /// Exponent of `x`.
    pub b: f64,
    /// Coefficient in the exponential term.
    pub c: f64,
    /// Frequency of the sine term.
    pub w: f64,
    /// Phase shift of the sine term.
    pub v: f64,
}

impl Default for PowerSine {
    fn default() -> Self {
        Self::new(1.0, 1.0, 0.1, 5.0, 0.0)
    }
}

impl PowerSine {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, w: f64, v: f64) -> Self {
        Self { a, b, c, w, v }
    }

    /// `x = sin(x)`: a single root at the origin.
    #[must_use]
    pub const fn simple() -> Self {
        Self::new(1.0, 1.0, 0.0, 1.0, 0.0)
    }

    /// `x² = e^(−0.2·x)·sin(5·x + 1)`: several roots near the origin.
    #[must_use]
    pub const fn complex() -> Self {
        Self::new(1.0, 2.0, -0.2, 5.0, 1.0)
    }

    /// Returns true if `x^b` is real for every `x`.
    ///
    /// Non-integer exponents leave the equation undefined for negative `x`,
    /// and negative exponents leave it undefined at zero.
    #[must_use]
    pub fn is_total(&self) -> bool {
        self.b.fract() == 0.0 && self.b >= 0.0
    }

    /// Evaluates the left side, `a·x^b`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if `x^b` has no real value.
    pub fn power(&self, x: f64) -> Result<f64, DomainError> {
        let b = self.b;
        if x < 0.0 && b.fract() != 0.0 {
            return Err(DomainError::FractionalPowerOfNegative { x, b });
        }
        if x == 0.0 && b < 0.0 {
            return Err(DomainError::ZeroToNegativePower { b });
        }

        #[allow(clippy::cast_possible_truncation)]
        let power = if b.fract() == 0.0 && b.abs() <= f64::from(i32::MAX) {
            x.powi(b as i32)
        } else {
            x.powf(b)
        };
        Ok(self.a * power)
    }

    /// Evaluates the right side, `e^(c·x)·sin(w·x + v)`.
    #[must_use]
    pub fn damped_sine(&self, x: f64) -> f64 {
        (self.c * x).exp() * (self.w * x + self.v).sin()
    }
}

impl Function for PowerSine {
    type Error = DomainError;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        let residual = self.power(x)? - self.damped_sine(x);
        if residual.is_finite() {
            Ok(residual)
        } else {
            Err(DomainError::NonFinite { x })
        }
    }
}

/// Renders the residual function with its constants, e.g.
/// `f(x) = 1.0·x^2.0 - e^(-0.2·x)·sin(5.0·x + 1.0)`.
impl fmt::Display for PowerSine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { a, b, c, w, v } = self;
        write!(f, "f(x) = {a:?}·x^{b:?} - e^({c:?}·x)·sin({w:?}·x + {v:?})")
    }
}
