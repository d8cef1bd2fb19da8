//! Driver error types.
//!
//! ┌ [`DemoCfgError`]    : invalid driver configuration (guesses, domain, samples)
//! ├ [`ComparisonError`] : a solver failed, or Newton gave no accepted value
//! ├ [`PlotError`]       : the figure could not be drawn or written
//! └ [`DemoError`]       : everything the binary can hit

use thiserror::Error;

use crate::root_finding::errors::ConfigError;
use crate::root_finding::newton::NewtonError;
use crate::root_finding::regula_falsi::RegulaFalsiError;
use crate::root_finding::secant::SecantError;

#[derive(Debug, Error, PartialEq)]
pub enum DemoCfgError {
    #[error("invalid initial guess: must be finite. got {got}")]
    InvalidGuess { got: f64 },

    #[error("initial guesses must be distinct. got p0=p1={got}")]
    EqualGuesses { got: f64 },

    #[error("invalid plot domain: need finite lo < hi. got [{lo}, {hi}]")]
    InvalidDomain { lo: f64, hi: f64 },

    #[error("invalid sample count: need at least 2. got {got}")]
    InvalidSamples { got: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum ComparisonError {
    #[error("newton: {0}")]
    Newton(#[from] NewtonError),

    #[error("secant: {0}")]
    Secant(#[from] SecantError),

    #[error("false position: {0}")]
    RegulaFalsi(#[from] RegulaFalsiError),

    #[error("newton did not converge from x0={p0}; no accepted value to compare against")]
    NoAcceptedValue { p0: f64 },
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("drawing failed: {0}")]
    Drawing(String),

    #[error("no finite samples of f on [{lo}, {hi}]")]
    EmptyRange { lo: f64, hi: f64 },
}

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    DemoCfg(#[from] DemoCfgError),

    #[error(transparent)]
    Comparison(#[from] ComparisonError),

    #[error(transparent)]
    Plot(#[from] PlotError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
