//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates the three methods
//! compared by this crate, along with their display names.

/// Root-finding algorithm variants.
/// - [`Algorithm::Newton`]        : one-point open method, needs `f'`
/// - [`Algorithm::Secant`]        : two-point open method
/// - [`Algorithm::FalsePosition`] : two-point method with sign-based endpoint retention
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Newton,
    Secant,
    FalsePosition,
}

impl Algorithm {
    /// All algorithms in the order they are reported.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Newton,
        Algorithm::Secant,
        Algorithm::FalsePosition,
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Newton        => "newton",
            Algorithm::Secant        => "secant",
            Algorithm::FalsePosition => "false_position",
        }
    }

    /// Human-readable label used in tables and plot legends.
    pub const fn title(self) -> &'static str {
        match self {
            Algorithm::Newton        => "Newton",
            Algorithm::Secant        => "Secant",
            Algorithm::FalsePosition => "False position",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
