use thiserror::Error;

/// Points where the equation has no real value.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// A negative base raised to a non-integer power.
    #[error("x^b is not real for x = {x} and non-integer b = {b}")]
    FractionalPowerOfNegative { x: f64, b: f64 },

    /// Zero raised to a negative power.
    #[error("0^b is undefined for negative b = {b}")]
    ZeroToNegativePower { b: f64 },

    /// Any other evaluation that overflowed or produced NaN.
    #[error("equation is not finite at x = {x}")]
    NonFinite { x: f64 },
}
