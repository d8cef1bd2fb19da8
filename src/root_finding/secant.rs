use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::{ConvergenceResult, IterationRecord};
use log::{debug, trace, warn};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("invalid initial guesses: x0={x0} and x1={x1} must be finite and distinct")]
    InvalidGuess { x0: f64, x1: f64 },

    #[error("degenerate secant: f(x0) == f(x1) for x0={x0}, x1={x1}")]
    DegenerateSecantStep { x0: f64, x1: f64 },
}

/// Calculates the x-intercept of the secant line through
/// `(x0, fx0)` and `(x1, fx1)`, written as a correction to `x1`:
///
/// `x1 - fx1 * (x1 - x0) / (fx1 - fx0)`
///
/// # Returns
/// - `Some(x)` for a nonzero denominator
/// - `None` when `fx1 == fx0` (horizontal secant)
#[inline]
pub(crate) fn secant_x_intercept(
    (x0, fx0): (f64, f64),
    (x1, fx1): (f64, f64),
) -> Option<f64> {
    let denom = fx1 - fx0;
    if denom == 0.0 {
        return None;
    }

    Some(x1 - (fx1 * (x1 - x0)) / denom)
}

/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `p0`   : First initial guess.  Must be finite and not equal to `p1`
/// - `p1`   : Second initial guess. Must be finite and not equal to `p0`
/// - `cfg`  : [`SolverCfg`] (tolerance, iteration cap)
///
/// # Returns
/// - `Ok(Some(result))` once `|x_{k+1} - x_k| < tolerance`
/// - `Ok(None)` if iterations `0..=max_iter` pass without converging
///
/// # Errors
/// - [`SecantError::InvalidGuess`]             : `p0` or `p1` is NaN/inf or equal
/// - [`SecantError::DegenerateSecantStep`]     : `f(x_k) == f(x_{k-1})`
///
/// * Propagated via [`SecantError::RootFinding`]
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
///
/// # Behavior
/// - Update:
///     x_{k+1} = x_k - f(x_k) * (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))
/// - The window slides forward every step; `f` is evaluated once per step
///   after the two initial evaluations.
pub fn secant<F>(
    mut func: F,
    p0: f64,
    p1: f64,
    cfg: SolverCfg
) -> Result<Option<ConvergenceResult>, SecantError>
where F: FnMut(f64) -> f64 {

    if !(p0.is_finite() && p1.is_finite()) || p0 == p1 {
        return Err(SecantError::InvalidGuess { x0: p0, x1: p1 });
    }

    let algorithm = Algorithm::Secant;

    // track function evaluations
    let mut evals = 0;

    // wraps func, increments evals, enforces finiteness
    let mut eval = |x: f64| -> Result<f64, SecantError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into())
        }

        Ok(fx)
    };

    let mut x_prev = p0;
    let mut x_curr = p1;
    let mut f_prev = eval(p0)?;
    let mut f_curr = eval(p1)?;
    let mut history = Vec::with_capacity(cfg.max_iter() + 1);

    for iteration in 0..=cfg.max_iter() {
        let x_next = secant_x_intercept((x_prev, f_prev), (x_curr, f_curr))
            .ok_or(SecantError::DegenerateSecantStep { x0: x_prev, x1: x_curr })?;
        let error = (x_next - x_curr).abs();

        trace!("{algorithm} iter {iteration}: x={x_next:.12} err={error:.3e}");
        history.push(IterationRecord { value: x_next, iteration, error });

        if cfg.converged(error) {
            debug!("{algorithm} converged to {x_next} after {} steps", iteration + 1);
            return Ok(ConvergenceResult::from_history(algorithm, history, evals));
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = eval(x_next)?;
    }

    warn!("{algorithm} did not converge from ({p0}, {p1}) within {} iterations", cfg.max_iter());
    Ok(None)
}
