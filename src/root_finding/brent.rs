//! Brent's method

use tracing::trace;
use super::algorithms::Algorithm;
use super::bisection::midpoint;
use super::bracket::{Session, Start};
use super::config::RootsCfg;
use super::errors::RootFindingError;
use super::report::{SolveResult, ToleranceSatisfied};
use super::signs::opposite_signs;

const ALGORITHM: Algorithm = Algorithm::Brent;


/// `true` when `x` and `y` agree to a few ulps (relative above 1, absolute
/// below).
#[inline]
fn near_equal(x: f64, y: f64) -> bool {
    let scale = (x.abs() + y.abs()).max(1.0);
    (x - y).abs() <= 8.0 * f64::EPSILON * scale
}


/// Inverse quadratic step through the contrapoint `a`, the best estimate `b`
/// and the previous best `c`.
///
/// Returns `None` when two abscissae or two residuals coincide, or when the
/// step is not finite.
#[inline]
fn inverse_quadratic(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
    (c, fc): (f64, f64),
) -> Option<f64> {
    let degenerate = near_equal(a, b) || near_equal(a, c) || near_equal(b, c)
        || near_equal(fa, fb) || near_equal(fa, fc) || near_equal(fb, fc);
    if degenerate {
        return None;
    }

    let fa_fc = fa / fc;
    let fb_fc = fb / fc;
    let fb_fa = fb / fa;

    let num = fb_fa * ((c - b) * fa_fc * (fa_fc - fb_fc) - (b - a) * (fb_fc - 1.0));
    let den = (fa_fc - 1.0) * (fb_fc - 1.0) * (fb_fa - 1.0);
    if !(num.is_finite() && den.is_finite()) || den == 0.0 {
        return None;
    }

    Some(b - num / den).filter(|s| s.is_finite())
}


/// Secant step from the best estimate `b` through the previous best `c`.
#[inline]
fn secant_step((b, fb): (f64, f64), (c, fc): (f64, f64)) -> Option<f64> {
    if near_equal(fb, fc) {
        return None;
    }
    Some((c * fb - b * fc) / (fb - fc)).filter(|s| s.is_finite())
}


/// `true` if `s` lies strictly between `(3a + b) / 4` and the best estimate
/// `b`, i.e. in the three quarters of the bracket nearest `b`.
#[inline]
fn near_best(a: f64, b: f64, s: f64) -> bool {
    let quarter = (3.0 * a + b) / 4.0;
    if a < b {
        quarter < s && s < b
    } else {
        b < s && s < quarter
    }
}


/// Finds a root using
/// [Brent's method](https://en.wikipedia.org/wiki/Brent%27s_method)
/// (bisection + secant + inverse quadratic interpolation).
///
/// # Arguments
/// - `func` : function to evaluate
/// - `a`    : one end of the initial bracket (finite)
/// - `b`    : other end of the initial bracket (finite)
/// - `cfg`  : [`RootsCfg`] (`xtol`, `ftol`, `max_iter`)
///
/// # Behavior
/// - Candidate: inverse quadratic interpolation through the contrapoint,
///   the best and the previous best estimates, else a secant step, else the
///   midpoint.
/// - The candidate is replaced by the midpoint when it falls outside the
///   three quarters of the bracket nearest `b`, does not at least halve the step before last, or when that step
///   was already below `xtol`.
/// - Converged when `|fb| < ftol` or `|b - a| < xtol`; root = `b`.
///
/// # Notes
/// - Globally convergent for continuous f with a valid sign-change bracket.
/// - Typically superlinear near simple roots.
///
/// # Errors
/// - [`RootFindingError::InvalidBounds`]       : `a`/`b` non-finite
/// - [`RootFindingError::NonFiniteEvaluation`] : f(x) produced NaN/inf
pub fn brent<F>(
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

    let xtol = cfg.xtol();
    let mut c  = br.a;
    let mut fc = br.fa;
    let mut d  = c;
    let mut mflag = true;

    for iter in 1..=cfg.max_iter() {

        let mut s = inverse_quadratic((br.a, br.fa), (br.b, br.fb), (c, fc))
            .or_else(|| secant_step((br.b, br.fb), (c, fc)))
            .unwrap_or_else(|| midpoint(br.a, br.b));

        let step_bc = (br.b - c).abs();
        let step_cd = (c - d).abs();

        let reject =
            !near_best(br.a, br.b, s)
            || ( mflag && (s - br.b).abs() >= 0.5 * step_bc)
            || (!mflag && (s - br.b).abs() >= 0.5 * step_cd)
            || ( mflag && step_bc < xtol)
            || (!mflag && step_cd < xtol);

        if reject {
            s = midpoint(br.a, br.b);
            mflag = true;
        } else {
            mflag = false;
        }

        let fs = session.eval(s)?;
        d  = c;
        c  = br.b;
        fc = br.fb;

        if opposite_signs(br.fa, fs) {
            br.b  = s;
            br.fb = fs;
        } else {
            br.a  = s;
            br.fa = fs;
        }
        br.order();
        trace!(method = %ALGORITHM, iter, a = br.a, b = br.b, fb = br.fb, bisected = mflag, "step");

        if cfg.residual_converged(br.fb) {
            return Ok(session.converged(iter, br.b, br.fb, br.bounds(), ToleranceSatisfied::Ftol));
        }
        if cfg.width_converged(br.a, br.b) {
            return Ok(session.converged(iter, br.b, br.fb, br.bounds(), ToleranceSatisfied::Xtol));
        }
    }

    Ok(session.exhausted(br.b, br.fb, br.bounds()))
}
