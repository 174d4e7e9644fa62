//! Dekker's method

use tracing::trace;
use super::algorithms::Algorithm;
use super::bisection::midpoint;
use super::bracket::{Session, Start};
use super::config::RootsCfg;
use super::errors::RootFindingError;
use super::report::{SolveResult, ToleranceSatisfied};
use super::signs::same_signs;

const ALGORITHM: Algorithm = Algorithm::Dekker;


/// `true` if `x` lies strictly between `lo` and `hi`, in either order.
#[inline]
pub(crate) fn strictly_between(x: f64, lo: f64, hi: f64) -> bool {
    if lo < hi {
        lo < x && x < hi
    } else {
        hi < x && x < lo
    }
}


/// Next trial point: secant step through the two latest iterates when it
/// falls strictly between `b` and the bisection point `m`, otherwise `m`.
///
/// # Arguments
/// - `(b, fb)` : current best estimate
/// - `(d, fd)` : previous best estimate
/// - `m`       : midpoint of the current bracket
/// - `min_step`: steps shorter than this are lengthened toward `m`
#[inline]
fn trial_point((b, fb): (f64, f64), (d, fd): (f64, f64), m: f64, min_step: f64) -> f64 {
    let s = if fb != fd { b - fb * (b - d) / (fb - fd) } else { m };
    let c = if strictly_between(s, b, m) { s } else { m };

    if (c - b).abs() < min_step {
        b + min_step.copysign(m - b)
    } else {
        c
    }
}


/// Finds a root using
/// [Dekker's method](https://en.wikipedia.org/wiki/Brent%27s_method#Dekker's_method),
/// a secant iteration safeguarded by bisection.
///
/// # Arguments
/// - `func` : function to evaluate
/// - `a`    : one end of the initial bracket (finite)
/// - `b`    : other end of the initial bracket (finite)
/// - `cfg`  : [`RootsCfg`] (`xtol`, `ftol`, `max_iter`)
///
/// # Behavior
/// Three points are tracked: the best estimate `b`, the contrapoint `a`
/// (`f(a) f(b) <= 0`) and the previous best estimate `d` (initially `a`).
/// Per iteration:
/// - `m = (a + b) / 2`
/// - secant `s = b - fb (b - d) / (fb - fd)`, or `m` if `fb == fd`
/// - trial `c = s` if `s` lies strictly between `b` and `m`, else `c = m`;
///   a step shorter than `xtol / 2` is stretched to `xtol / 2` toward `m`
/// - `d = b`, `b = c`; if the new `b` no longer brackets with `a`, the
///   previous best becomes the contrapoint (`a = d`)
/// - swap so that `|fb| <= |fa|`
/// - converged when `|b - a| < xtol` or `|fb| < ftol`; root = `b`
///
/// # Notes
/// - Superlinear while secant steps are accepted, never worse than
///   bisection by more than the minimum-step stretch.
///
/// # Errors
/// - [`RootFindingError::InvalidBounds`]       : `a`/`b` non-finite
/// - [`RootFindingError::NonFiniteEvaluation`] : f(x) produced NaN/inf
pub fn dekker<F>(
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

    let min_step = 0.5 * cfg.xtol();
    let mut d  = br.a;
    let mut fd = br.fa;

    for iter in 1..=cfg.max_iter() {
        let m  = midpoint(br.a, br.b);
        let c  = trial_point((br.b, br.fb), (d, fd), m, min_step);
        let fc = session.eval(c)?;

        d     = br.b;
        fd    = br.fb;
        br.b  = c;
        br.fb = fc;
        if same_signs(br.fa, br.fb) {
            br.a  = d;
            br.fa = fd;
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
