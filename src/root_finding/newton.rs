//! Newton-Raphson method

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::{ConvergenceResult, IterationRecord};
use log::{debug, trace, warn};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("derivative vanishes at x={x}; Newton step undefined")]
    ZeroDerivative { x: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },
}

/// Helpers
/// - `eval_fx_checked`  : evaluates `f(x)` with finite-check
/// - `eval_dfx_checked` : evaluates `f'(x)`, rejecting zero and non-finite values
#[inline]
fn eval_fx_checked<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError> where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }

    Ok(fx)
}
#[inline]
fn eval_dfx_checked<G>(
    df: &mut G,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError> where G: FnMut(f64) -> f64 {
    let dfx = { *evals += 1; df(x) };
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }
    if dfx == 0.0 {
        return Err(NewtonError::ZeroDerivative { x });
    }

    Ok(dfx)
}

/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method)
/// with an analytic derivative.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : derivative of `func`
/// - `p0`    : finite initial guess
/// - `cfg`   : [`SolverCfg`] (tolerance, iteration cap)
///
/// # Returns
/// - `Ok(Some(result))` once `|p_n - p_{n-1}| < tolerance`
/// - `Ok(None)` if iterations `0..=max_iter` pass without converging
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]              : `p0` non-finite
/// - [`NewtonError::ZeroDerivative`]            : `f'(p) == 0`
/// - [`NewtonError::DerivativeNotFinite`]       : `f'(p)` is NaN/inf
///
/// * Propagated via [`NewtonError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`]  : `f(p)` produced NaN/inf
///
/// # Notes
/// - Convergence is local and quadratic near a simple root. Poor guesses
///   can diverge, which shows up here as `Ok(None)`.
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: G,
    p0: f64,
    cfg: SolverCfg,
) -> Result<Option<ConvergenceResult>, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    if !p0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0: p0 });
    }

    let algorithm = Algorithm::Newton;
    let mut evals = 0;
    let mut history = Vec::with_capacity(cfg.max_iter() + 1);

    let mut p = p0;
    for iteration in 0..=cfg.max_iter() {
        let fx  = eval_fx_checked(&mut func, p, &mut evals)?;
        let dfx = eval_dfx_checked(&mut dfunc, p, &mut evals)?;

        let p_next = p - fx / dfx;
        let error  = (p_next - p).abs();
        p = p_next;

        trace!("{algorithm} iter {iteration}: x={p:.12} err={error:.3e}");
        history.push(IterationRecord { value: p, iteration, error });

        if cfg.converged(error) {
            debug!("{algorithm} converged to {p} after {} steps", iteration + 1);
            return Ok(ConvergenceResult::from_history(algorithm, history, evals));
        }
    }

    warn!("{algorithm} did not converge from x0={p0} within {} iterations", cfg.max_iter());
    Ok(None)
}
