//! Sign utilities for root-finding algorithms.
//! - `opposite_signs` : `true` if `x * y < 0`
//! - `same_signs`     : `true` if `x * y > 0`
//! - `sign`           : -1, 0 or +1
//! - `ensure_b_is_best` : best-estimate ordering step
//!
//! Comparisons are made on the signs directly so that products of tiny
//! values cannot underflow to zero.


/// Returns `true` if `x` and `y` are nonzero with opposite signs.
#[inline]
pub(crate) fn opposite_signs(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}


/// Returns `true` if `x` and `y` are nonzero with the same sign.
#[inline]
pub(crate) fn same_signs(x: f64, y: f64) -> bool {
    (x > 0.0 && y > 0.0) || (x < 0.0 && y < 0.0)
}


/// Returns +1.0 for positive, -1.0 for negative and 0.0 for zero `x`.
#[inline]
pub(crate) fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}


/// Swaps `(a, fa)` with `(b, fb)` if `|fa| < |fb|`, so that `b` holds the
/// best estimate of the root.
#[inline]
pub(crate) fn ensure_b_is_best(a: &mut f64, b: &mut f64, fa: &mut f64, fb: &mut f64) {
    if fa.abs() < fb.abs() {
        std::mem::swap(a, b);
        std::mem::swap(fa, fb);
    }
}
