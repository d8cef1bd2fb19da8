//! Sign utilities for root-finding algorithms.

/// Returns `true` if `x` and `y` are nonzero with opposite signs.
///
/// Zero counts as neither sign, so `opposite_sign(0.0, -1.0)` is `false`.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}
