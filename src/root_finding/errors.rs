//! Root-finding error types.
//!
//! ┌ [`ConfigError`]      : invalid solver configuration
//! │   ├ tolerance not finite or <= 0
//! │   └ max_iter < 1
//! │
//! └ [`RootFindingError`] : common runtime errors
//!     └ non-finite function evaluation
//!
//! Method-specific failures (zero derivative, degenerate secant) live
//! next to their solver and wrap [`RootFindingError`] transparently.
//! Running out of iterations is not an error; solvers return `Ok(None)`.

use thiserror::Error;

/// Configuration errors raised by validated setters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}

/// Root-finding runtime errors shared by every solver.
#[derive(Debug, Error, PartialEq)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },
}
