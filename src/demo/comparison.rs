//! Runs all three solvers on the target function and scores them
//! against the accepted value (Newton's root).

use log::info;

use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::config::SolverCfg;
use crate::root_finding::newton::newton;
use crate::root_finding::regula_falsi::regula_falsi;
use crate::root_finding::report::ConvergenceResult;
use crate::root_finding::secant::secant;
use crate::target;

use super::errors::ComparisonError;

/// One method's outcome. `result` is `None` when the method hit the
/// iteration cap.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodOutcome {
    pub algorithm : Algorithm,
    pub result    : Option<ConvergenceResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    accepted : f64,
    outcomes : Vec<MethodOutcome>,
}

impl Comparison {
    /// Runs Newton from `p0`, then secant and false position from
    /// `(p0, p1)`, all against [`target::f`].
    ///
    /// # Errors
    /// - any fatal solver error, wrapped per method
    /// - [`ComparisonError::NoAcceptedValue`] if Newton does not converge
    pub fn run(p0: f64, p1: f64, cfg: SolverCfg) -> Result<Self, ComparisonError> {
        let newton_res = newton(target::f, target::fprime, p0, cfg)?;
        let secant_res = secant(target::f, p0, p1, cfg)?;
        let falsi_res  = regula_falsi(target::f, p0, p1, cfg)?;

        Self::from_results(p0, newton_res, secant_res, falsi_res)
    }

    pub(crate) fn from_results(
        p0: f64,
        newton_res: Option<ConvergenceResult>,
        secant_res: Option<ConvergenceResult>,
        falsi_res: Option<ConvergenceResult>,
    ) -> Result<Self, ComparisonError> {
        let accepted = newton_res
            .as_ref()
            .map(ConvergenceResult::root)
            .ok_or(ComparisonError::NoAcceptedValue { p0 })?;
        info!("accepted value (newton): {accepted}");

        let outcomes = vec![
            MethodOutcome { algorithm: Algorithm::Newton,        result: newton_res },
            MethodOutcome { algorithm: Algorithm::Secant,        result: secant_res },
            MethodOutcome { algorithm: Algorithm::FalsePosition, result: falsi_res  },
        ];

        Ok(Self { accepted, outcomes })
    }

    /// Newton's root, used as ground truth.
    pub fn accepted(&self) -> f64 {
        self.accepted
    }

    pub fn outcomes(&self) -> &[MethodOutcome] {
        &self.outcomes
    }

    pub fn outcome(&self, algorithm: Algorithm) -> Option<&MethodOutcome> {
        self.outcomes.iter().find(|o| o.algorithm == algorithm)
    }

    /// Converged result for `algorithm`, if any.
    pub fn result(&self, algorithm: Algorithm) -> Option<&ConvergenceResult> {
        self.outcome(algorithm)?.result.as_ref()
    }

    /// `|value - accepted|`
    pub fn absolute_error(&self, value: f64) -> f64 {
        (value - self.accepted).abs()
    }

    /// `|value - accepted| / |accepted|`, or `None` if the accepted value is zero.
    pub fn relative_error(&self, value: f64) -> Option<f64> {
        if self.accepted == 0.0 {
            return None;
        }
        Some(self.absolute_error(value) / self.accepted.abs())
    }
}
