//! Shared configuration for root-finding algorithms.
//!
//! Provides [`SolverCfg`] with the default tolerance and iteration cap
//! used by all three solvers.
//!
//! [`SolverCfg`] — universal fields
//! ├ `tolerance` : bound on `|x_n - x_{n-1}|` to declare convergence
//! └ `max_iter`  : iteration cap; iterations are numbered `0..=max_iter`
//!
//! [`SolverCfg::new`] initializes configuration with default values.

use super::errors::ConfigError;

pub const DEFAULT_TOLERANCE : f64   = 1e-5;
pub const DEFAULT_MAX_ITER  : usize = 20;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolverCfg {
    tolerance: f64,
    max_iter:  usize,
}

impl SolverCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tolerance : DEFAULT_TOLERANCE,
            max_iter  : DEFAULT_MAX_ITER,
        }
    }

    // getters
    pub fn tolerance(&self) -> f64   { self.tolerance }
    pub fn max_iter(&self)  -> usize { self.max_iter }

    pub fn set_tolerance(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidTolerance { got: v });
        }
        self.tolerance = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }

    /// `true` once a step is strictly below the tolerance.
    #[inline]
    pub(crate) fn converged(&self, error: f64) -> bool {
        error < self.tolerance
    }
}

impl Default for SolverCfg {
    fn default() -> Self { Self::new() }
}
