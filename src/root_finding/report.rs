//! Defines the [`ConvergenceResult`] struct returned by all
//! root-finding algorithms.
//!
//! A solver that runs out of iterations returns `Ok(None)` instead of a
//! result, so a [`ConvergenceResult`] always describes a converged run.

use super::algorithms::Algorithm;

/// One solver step.
///
/// - `value`     : iterate produced by this step
/// - `iteration` : zero-based step index
/// - `error`     : `|value - previous iterate|`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationRecord {
    pub value     : f64,
    pub iteration : usize,
    pub error     : f64,
}

/// Final report returned by all root-finding algorithms on convergence.
///
/// [`ConvergenceResult`]
/// - `algorithm`   : which solver produced it
/// - `last`        : the converged step
/// - `secondlast`  : the step before it; `None` when the first step converged
/// - `history`     : every recorded step, oldest first
/// - `evaluations` : total calls to `f` (and `f'` for Newton)
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceResult {
    pub algorithm   : Algorithm,
    pub last        : IterationRecord,
    pub secondlast  : Option<IterationRecord>,
    pub history     : Vec<IterationRecord>,
    pub evaluations : usize,
}

impl ConvergenceResult {
    /// Builds a result from the recorded steps.
    ///
    /// Returns `None` if `history` is empty.
    pub(crate) fn from_history(
        algorithm: Algorithm,
        history: Vec<IterationRecord>,
        evaluations: usize,
    ) -> Option<Self> {
        let n = history.len();
        let last = *history.last()?;
        let secondlast = n.checked_sub(2).map(|i| history[i]);

        Some(Self { algorithm, last, secondlast, history, evaluations })
    }

    /// Root estimate.
    pub fn root(&self) -> f64 {
        self.last.value
    }

    /// Number of steps taken (the last iteration index plus one).
    pub fn steps(&self) -> usize {
        self.last.iteration + 1
    }
}
