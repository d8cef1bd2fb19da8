//! Driver configuration.
//!
//! [`DemoCfg`]
//! ├ `p0`, `p1`  : starting guesses (Newton uses `p0` only)
//! ├ `solver`    : [`SolverCfg`] shared by all three methods
//! ├ `plot_path` : where to write the SVG figure; `None` skips plotting
//! ├ `samples`   : number of points used to draw `f`
//! └ `domain`    : x-range of the figure
//!
//! [`DemoCfg::new`] reproduces the classic setup: guesses `1.3` and `2`,
//! tolerance `1e-5`, 20 iterations, `f` drawn over `[-5, 5]`.

use std::path::{Path, PathBuf};

use crate::root_finding::config::SolverCfg;
use crate::target;

use super::errors::DemoCfgError;

pub const DEFAULT_PLOT_PATH : &str  = "root_finding.svg";
pub const DEFAULT_SAMPLES   : usize = 201;

#[derive(Debug, Clone, PartialEq)]
pub struct DemoCfg {
    p0        : f64,
    p1        : f64,
    solver    : SolverCfg,
    plot_path : Option<PathBuf>,
    samples   : usize,
    domain    : (f64, f64),
}

impl DemoCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            p0        : target::P0,
            p1        : target::P1,
            solver    : SolverCfg::new(),
            plot_path : Some(PathBuf::from(DEFAULT_PLOT_PATH)),
            samples   : DEFAULT_SAMPLES,
            domain    : target::DOMAIN,
        }
    }

    // getters
    pub fn p0(&self)        -> f64 { self.p0 }
    pub fn p1(&self)        -> f64 { self.p1 }
    pub fn solver(&self)    -> SolverCfg { self.solver }
    pub fn plot_path(&self) -> Option<&Path> { self.plot_path.as_deref() }
    pub fn samples(&self)   -> usize { self.samples }
    pub fn domain(&self)    -> (f64, f64) { self.domain }

    pub fn set_guesses(mut self, p0: f64, p1: f64) -> Result<Self, DemoCfgError> {
        for v in [p0, p1] {
            if !v.is_finite() {
                return Err(DemoCfgError::InvalidGuess { got: v });
            }
        }
        if p0 == p1 {
            return Err(DemoCfgError::EqualGuesses { got: p0 });
        }
        self.p0 = p0;
        self.p1 = p1;
        Ok(self)
    }

    pub fn set_solver(mut self, v: SolverCfg) -> Self {
        self.solver = v;
        self
    }

    pub fn set_plot_path(mut self, v: impl Into<PathBuf>) -> Self {
        self.plot_path = Some(v.into());
        self
    }

    pub fn without_plot(mut self) -> Self {
        self.plot_path = None;
        self
    }

    pub fn set_samples(mut self, v: usize) -> Result<Self, DemoCfgError> {
        if v < 2 {
            return Err(DemoCfgError::InvalidSamples { got: v });
        }
        self.samples = v;
        Ok(self)
    }

    pub fn set_domain(mut self, lo: f64, hi: f64) -> Result<Self, DemoCfgError> {
        if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
            return Err(DemoCfgError::InvalidDomain { lo, hi });
        }
        self.domain = (lo, hi);
        Ok(self)
    }
}

impl Default for DemoCfg {
    fn default() -> Self { Self::new() }
}
