//! The fixed function every solver is run against.
//!
//! `f(x) = e^x + 2^(-x) + cos(x) - 6`
//!
//! It has two real roots, near `-2.781` and `1.777`. The default guesses
//! aim at the positive one.

use std::f64::consts::LN_2;

/// First starting guess (Newton uses only this one).
pub const P0: f64 = 1.3;
/// Second starting guess for the two-point methods.
pub const P1: f64 = 2.0;

/// Default x-range for plotting.
pub const DOMAIN: (f64, f64) = (-5.0, 5.0);

#[inline]
pub fn f(x: f64) -> f64 {
    x.exp() + 2f64.powf(-x) + x.cos() - 6.0
}

/// Analytic derivative of [`f`].
#[inline]
pub fn fprime(x: f64) -> f64 {
    x.exp() - 2f64.powf(-x) * LN_2 - x.sin()
}
