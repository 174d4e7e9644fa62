//! Secant method started from a validated bracket

use tracing::trace;
use super::algorithms::Algorithm;
use super::bisection::midpoint;
use super::bracket::{Session, Start};
use super::config::RootsCfg;
use super::errors::RootFindingError;
use super::report::{SolveResult, ToleranceSatisfied};

const ALGORITHM: Algorithm = Algorithm::Secant;


/// Secant step from `(x2, fx2)` through `(x1, fx1)`.
///
/// # Returns
/// - `x2 - fx2 (x2 - x1) / (fx2 - fx1)` when `fx2 != fx1`
/// - the midpoint of `x1` and `x2` otherwise (no slope information)
#[inline]
fn next_estimate((x1, fx1): (f64, f64), (x2, fx2): (f64, f64)) -> f64 {
    if fx2 == fx1 {
        return midpoint(x1, x2);
    }
    x2 - fx2 * (x2 - x1) / (fx2 - fx1)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method),
/// after checking that `[a, b]` brackets a root.
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `a`    : One end of the initial bracket. Must be finite
/// - `b`    : Other end of the initial bracket. Must be finite
/// - `cfg`  : [`RootsCfg`] (`xtol`, `ftol`, `max_iter`)
///
/// # Behavior
/// - Update:
///     - `c = b - fb (b - a) / (fb - fa)`; then `(a, b) = (b, c)`
///     - `fb == fa` falls back to the midpoint of `a` and `b`
/// - Converged when `|fc| < ftol` or `|c - b| < xtol`; root = `c`
///
/// # Notes
/// - Superlinear (~1.618) near simple roots.
///
/// # Warning
/// - Only the starting pair is a bracket. Later iterates may leave it, so
///   the sign change is not preserved and convergence is not guaranteed.
///   Use [`dekker`](super::dekker::dekker) or [`brent`](super::brent::brent)
///   for a safeguarded secant.
///
/// # Errors
/// - [`RootFindingError::InvalidBounds`]       : `a` or `b` is NaN/inf
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
pub fn secant<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: &RootsCfg,
) -> Result<SolveResult, RootFindingError>
where F: FnMut(f64) -> f64 {

    let mut session = Session::new(ALGORITHM, func, a, b, cfg)?;
    let br = match session.validate(cfg)? {
        Start::Iterate(br) => br,
        Start::Done(result) => return Ok(result),
    };

    let (mut x1, mut fx1) = (br.a, br.fa);
    let (mut x2, mut fx2) = (br.b, br.fb);
    for iter in 1..=cfg.max_iter() {
        let x_next = next_estimate((x1, fx1), (x2, fx2));
        let f_next = session.eval(x_next)?;
        trace!(method = %ALGORITHM, iter, x = x_next, fx = f_next, "step");

        if cfg.residual_converged(f_next) {
            return Ok(session.converged(iter, x_next, f_next, [x2, x_next], ToleranceSatisfied::Ftol));
        }
        if cfg.width_converged(x_next, x2) {
            return Ok(session.converged(iter, x_next, f_next, [x2, x_next], ToleranceSatisfied::Xtol));
        }

        x1  = x2;
        fx1 = fx2;
        x2  = x_next;
        fx2 = f_next;
    }

    Ok(session.exhausted(x2, fx2, [x1, x2]))
}
