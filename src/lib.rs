//! Newton, secant and false-position root finding, compared on the fixed
//! function `f(x) = e^x + 2^(-x) + cos(x) - 6`.
//!
//! - [`root_finding`] : the three solvers and the result they share
//! - [`target`]       : `f`, `f'` and the default starting guesses
//! - [`demo`]         : comparison tables and the annotated plot

pub mod demo;
pub mod root_finding;
pub mod target;
