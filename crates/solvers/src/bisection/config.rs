use super::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Function values with magnitude strictly below `tol` count as zero.
    pub tol: f64,
    /// Maximum number of halvings before giving up on convergence.
    pub max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tol: 1e-8,
            max_iters: 200,
        }
    }
}

impl Config {
    /// Validates that the tolerance is positive and at least one iteration is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTolerance`] if `tol` is not positive (or is NaN),
    /// or [`Error::ZeroMaxIters`] if `max_iters` is zero.
    pub fn validate(&self) -> Result<(), Error> {
        if self.tol.is_nan() || self.tol <= 0.0 {
            return Err(Error::InvalidTolerance { tol: self.tol });
        }
        if self.max_iters == 0 {
            return Err(Error::ZeroMaxIters);
        }
        Ok(())
    }
}
