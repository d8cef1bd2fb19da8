//! Driver that compares the three solvers on [`crate::target::f`],
//! prints the tables and draws the figure.

pub mod comparison;
pub mod config;
pub mod errors;
pub mod plot;
pub mod table;

use std::io::Write;

use log::info;

pub use comparison::{Comparison, MethodOutcome};
pub use config::DemoCfg;
pub use errors::DemoError;
use table::{ComparisonTable, ConvergenceTable};

/// Runs the full demonstration.
///
/// Writes one convergence table per method followed by the comparison
/// table to `out`, then draws the figure if `cfg` has a plot path.
///
/// # Errors
/// - [`DemoError::Comparison`] : a solver failed or Newton did not converge
/// - [`DemoError::Plot`]       : the figure could not be written
/// - [`DemoError::Io`]         : writing to `out` failed
pub fn run<W: Write>(cfg: &DemoCfg, out: &mut W) -> Result<Comparison, DemoError> {
    info!(
        "comparing methods from p0={}, p1={} (tol={}, max_iter={})",
        cfg.p0(), cfg.p1(), cfg.solver().tolerance(), cfg.solver().max_iter()
    );
    let comparison = Comparison::run(cfg.p0(), cfg.p1(), cfg.solver())?;

    for outcome in comparison.outcomes() {
        writeln!(out, "{}", ConvergenceTable { outcome })?;
    }
    write!(out, "{}", ComparisonTable { comparison: &comparison })?;

    if let Some(path) = cfg.plot_path() {
        plot::render(&comparison, path, cfg.domain(), cfg.samples())?;
    }

    Ok(comparison)
}
