use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: lower bound {lower} must be less than upper bound {upper}")]
    InvalidBracket { lower: f64, upper: f64 },

    #[error("invalid tolerance {tol}: must be positive")]
    InvalidTolerance { tol: f64 },

    #[error("max_iters must be at least 1")]
    ZeroMaxIters,

    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn function<E: StdError + Send + Sync + 'static>(x: f64, err: E) -> Self {
        Self::Function {
            x,
            source: Box::new(err),
        }
    }
}
