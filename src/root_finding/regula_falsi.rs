use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::{ConvergenceResult, IterationRecord};
use super::secant::secant_x_intercept;
use super::signs::opposite_sign;
use log::{debug, trace, warn};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RegulaFalsiError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("invalid initial guesses: x0={x0} and x1={x1} must be finite and distinct")]
    InvalidGuess { x0: f64, x1: f64 },

    #[error("degenerate secant: f(a) == f(b) for a={a}, b={b}")]
    DegenerateSecantStep { a: f64, b: f64 },
}

/// Finds a root of a function using the classic
/// [false position method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// # Arguments
/// ├ `func` - the function whose root is to be found
/// ├ `p0`   - retained endpoint
/// ├ `p1`   - most recent endpoint
/// └ `cfg`  - [`SolverCfg`] (tolerance, iteration cap)
///
/// # Returns
/// ├ `Ok(Some(result))` once `|x_{k+1} - p1| < tolerance`
/// └ `Ok(None)` if iterations `0..=max_iter` pass without converging
///
/// # Errors
/// ├ [`RegulaFalsiError::InvalidGuess`]         - `p0`/`p1` non-finite or equal
/// ├ [`RegulaFalsiError::DegenerateSecantStep`] - `f(p0) == f(p1)`
/// └ [`RegulaFalsiError::RootFinding`]          - `f(x)` produced NaN/inf
///
/// # Behavior
/// ├ The update is the secant intercept through `(p0, f(p0))` and `(p1, f(p1))`.
/// ├ If `f(x)` and `f(p1)` have opposite signs, `p1` becomes the retained
/// │ endpoint `p0`; otherwise `p0` is kept. `x` always replaces `p1`.
/// └ A sign change on `[p0, p1]` is not required up front. Without one
///   the method behaves like the secant method until a sign change appears.
///
/// # Notes
/// └ This is the unmodified (pure) variant. On convex or concave stretches
///   one endpoint can freeze and convergence becomes linear and slow.
pub fn regula_falsi<F>(
    mut func: F,
    p0: f64,
    p1: f64,
    cfg: SolverCfg
) -> Result<Option<ConvergenceResult>, RegulaFalsiError>
where F: FnMut(f64) -> f64 {

    if !(p0.is_finite() && p1.is_finite()) || p0 == p1 {
        return Err(RegulaFalsiError::InvalidGuess { x0: p0, x1: p1 });
    }

    let algorithm = Algorithm::FalsePosition;

    let mut evals = 0;
    let mut eval = |x: f64| -> Result<f64, RegulaFalsiError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }

        Ok(fx)
    };

    let mut a  = p0;
    let mut b  = p1;
    let mut fa = eval(a)?;
    let mut fb = eval(b)?;
    let mut history = Vec::with_capacity(cfg.max_iter() + 1);

    for iteration in 0..=cfg.max_iter() {
        let x = secant_x_intercept((a, fa), (b, fb))
            .ok_or(RegulaFalsiError::DegenerateSecantStep { a, b })?;
        let error = (x - b).abs();

        trace!("{algorithm} iter {iteration}: x={x:.12} err={error:.3e} a={a:.12}");
        history.push(IterationRecord { value: x, iteration, error });

        if cfg.converged(error) {
            debug!("{algorithm} converged to {x} after {} steps", iteration + 1);
            return Ok(ConvergenceResult::from_history(algorithm, history, evals));
        }

        // keep the endpoint on the far side of the sign change
        let fx = eval(x)?;
        if opposite_sign(fx, fb) {
            a  = b;
            fa = fb;
        }
        b  = x;
        fb = fx;
    }

    warn!("{algorithm} did not converge from ({p0}, {p1}) within {} iterations", cfg.max_iter());
    Ok(None)
}
