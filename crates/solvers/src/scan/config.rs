use thiserror::Error;

use crate::bisection;

/// Configuration for the root scanner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Fields")
)]
pub struct Config {
    step: f64,
    tol: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a scanner config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step must be finite and positive")]
    Step,

    #[error("tol must be positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.01, 1e-8, 200).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated step, tolerance, and iteration limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not finite and positive, `tol` is not
    /// positive, or `max_iters` is zero.
    pub fn new(step: f64, tol: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }
        if tol.is_nan() || tol <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            step,
            tol,
            max_iters,
        })
    }

    /// Returns the width of each scan cell.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the tolerance used for root acceptance and de-duplication.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the bisection iteration limit applied to each cell.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the bisection config used to refine each cell.
    #[must_use]
    pub fn bisection(&self) -> bisection::Config {
        bisection::Config {
            tol: self.tol,
            max_iters: self.max_iters,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct Fields {
    step: f64,
    tol: f64,
    max_iters: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<Fields> for Config {
    type Error = ConfigError;

    fn try_from(fields: Fields) -> Result<Self, Self::Error> {
        Self::new(fields.step, fields.tol, fields.max_iters)
    }
}
