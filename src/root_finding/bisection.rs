//! Bisection method

use tracing::trace;
use super::algorithms::Algorithm;
use super::bracket::{Session, Start};
use super::config::RootsCfg;
use super::errors::RootFindingError;
use super::report::{SolveResult, ToleranceSatisfied};
use super::signs::opposite_signs;

const ALGORITHM: Algorithm = Algorithm::Bisection;


/// Midpoint of `[a, b]`, in either order.
///
/// Falls back to `a/2 + b/2` when `b - a` overflows (wide brackets
/// straddling zero).
#[inline]
pub(crate) fn midpoint(a: f64, b: f64) -> f64 {
    let width = b - a;
    if width.is_finite() {
        a + width * 0.5
    } else {
        0.5 * a + 0.5 * b
    }
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that the function `func` is continuous between `a`
/// and `b` and that `func(a)` and `func(b)` have opposite signs.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the search interval. Must be finite.
/// ├ `b`    - Other end of the search interval. Must be finite. Order is free.
/// └ `cfg`  - [`RootsCfg`] with `xtol`, `ftol` and `max_iter`.
///
/// # Behavior
///
/// Per iteration:
/// ├ `c = (a + b) / 2`, `fc = f(c)`
/// ├ `fa * fc < 0` → `(b, fb) = (c, fc)`, else `(a, fa) = (c, fc)`
/// ├ swap so that `|fb| <= |fa|`
/// └ converged when `|b - a| < xtol` or `|fb| < ftol`; root = `b`
///
/// The bracket halves every step, so convergence is linear and guaranteed
/// for a valid initial bracket.
///
/// # Returns
///
/// A [`SolveResult`]. Its `status` is `NotBracketed` when `func(a)` and
/// `func(b)` share a sign and `MaxIterationsExceeded` when the budget runs
/// out; in the latter case `bracket` holds the last interval.
///
/// # Errors
///
/// ┌ [`RootFindingError::InvalidBounds`]       - `a` or `b` is NaN/inf.
/// └ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produces NaN or inf.
pub fn bisection<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: &RootsCfg,
) -> Result<SolveResult, RootFindingError>
where F: FnMut(f64) -> f64 {

    let mut session = Session::new(ALGORITHM, func, a, b, cfg)?;
    let mut br = match session.validate(cfg)? {
        Start::Iterate(br) => br,
        Start::Done(result) => return Ok(result),
    };

    for iter in 1..=cfg.max_iter() {
        let c  = midpoint(br.a, br.b);
        let fc = session.eval(c)?;

        // shrink interval
        if opposite_signs(br.fa, fc) {
            br.b  = c;
            br.fb = fc;
        } else {
            br.a  = c;
            br.fa = fc;
        }
        br.order();
        trace!(method = %ALGORITHM, iter, a = br.a, b = br.b, fb = br.fb, "step");

        if cfg.residual_converged(br.fb) {
            return Ok(session.converged(iter, br.b, br.fb, br.bounds(), ToleranceSatisfied::Ftol));
        }
        if cfg.width_converged(br.a, br.b) {
            return Ok(session.converged(iter, br.b, br.fb, br.bounds(), ToleranceSatisfied::Xtol));
        }
    }

    Ok(session.exhausted(br.b, br.fb, br.bounds()))
}
