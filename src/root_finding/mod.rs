// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub(crate) mod signs;

// algorithms
pub mod newton;
pub mod secant;
pub mod regula_falsi;

pub use algorithms::Algorithm;
pub use config::SolverCfg;
pub use report::{ConvergenceResult, IterationRecord};
