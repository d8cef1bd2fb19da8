//! Plain-text tables for solver output.
//!
//! - [`ConvergenceTable`] : every recorded step of one method
//! - [`ComparisonTable`]  : last two steps of each method, scored against
//!   the accepted value

use std::fmt;

use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::report::{ConvergenceResult, IterationRecord};
use crate::target;

use super::comparison::{Comparison, MethodOutcome};

const NOT_CONVERGED: &str = "did not converge";

/// Full iteration history of one method.
pub struct ConvergenceTable<'a> {
    pub outcome: &'a MethodOutcome,
}

impl fmt::Display for ConvergenceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.outcome.algorithm.title();
        let Some(res) = self.outcome.result.as_ref() else {
            return writeln!(f, "{title}: {NOT_CONVERGED}");
        };

        writeln!(
            f,
            "{title}: converged in {} steps ({} evaluations)",
            res.steps(), res.evaluations
        )?;
        writeln!(f, "{:>5}  {:>20}  {:>12}", "iter", "x", "|dx|")?;
        for rec in &res.history {
            writeln!(f, "{:>5}  {:>20.12}  {:>12.4e}", rec.iteration, rec.value, rec.error)?;
        }
        Ok(())
    }
}

/// Side-by-side summary of the final two steps per method.
pub struct ComparisonTable<'a> {
    pub comparison: &'a Comparison,
}

impl ComparisonTable<'_> {
    fn write_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &str,
        step: &str,
        rec: &IterationRecord,
        scored: bool,
    ) -> fmt::Result {
        write!(
            f,
            "{label:<16}{step:<6}{:>5}  {:>20.12}  {:>12.4e}",
            rec.iteration, rec.value, rec.error
        )?;
        if scored {
            let cmp = self.comparison;
            let rel = match cmp.relative_error(rec.value) {
                Some(r) => format!("{r:.4e}"),
                None    => "-".to_string(),
            };
            write!(
                f,
                "  {:>12.4e}  {:>12.4e}  {:>12}",
                target::f(rec.value).abs(), cmp.absolute_error(rec.value), rel
            )?;
        }
        writeln!(f)
    }

    fn write_result(
        &self,
        f: &mut fmt::Formatter<'_>,
        algorithm: Algorithm,
        res: &ConvergenceResult,
    ) -> fmt::Result {
        let title = algorithm.title();
        match res.secondlast.as_ref() {
            Some(prev) => {
                self.write_row(f, title, "n-1", prev, false)?;
                self.write_row(f, "", "n", &res.last, true)
            }
            None => self.write_row(f, title, "n", &res.last, true),
        }
    }
}

impl fmt::Display for ComparisonTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "accepted value (newton): {:.12}", self.comparison.accepted())?;
        writeln!(
            f,
            "{:<16}{:<6}{:>5}  {:>20}  {:>12}  {:>12}  {:>12}  {:>12}",
            "method", "step", "iter", "x", "|dx|", "|f(x)|", "abs err", "rel err"
        )?;
        for outcome in self.comparison.outcomes() {
            match outcome.result.as_ref() {
                Some(res) => self.write_result(f, outcome.algorithm, res)?,
                None      => writeln!(f, "{:<16}{NOT_CONVERGED}", outcome.algorithm.title())?,
            }
        }
        Ok(())
    }
}
