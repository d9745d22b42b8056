use std::error::Error as StdError;

use thiserror::Error;

use crate::bisection;

use super::ConfigError;

/// Errors that can occur while scanning for roots.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("scan range contains non-finite value: {value}")]
    NonFiniteRange { value: f64 },

    #[error("step is too small to advance the scan past x = {x}")]
    StepTooSmall { x: f64 },

    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("bisection failed: {0}")]
    Bisection(#[from] bisection::Error),
}
