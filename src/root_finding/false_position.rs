//! False position (regula falsi) method

use tracing::trace;
use super::algorithms::Algorithm;
use super::bracket::{Session, Start};
use super::config::RootsCfg;
use super::errors::RootFindingError;
use super::report::{SolveResult, ToleranceSatisfied};
use super::signs::opposite_signs;

const ALGORITHM: Algorithm = Algorithm::FalsePosition;


/// x-intercept of the line through `(a, fa)` and `(b, fb)`.
///
/// Only called on a sign-changing bracket, so `fb - fa != 0`.
#[inline]
fn secant_x_intercept((a, fa): (f64, f64), (b, fb): (f64, f64)) -> f64 {
    (a * fb - b * fa) / (fb - fa)
}


/// Finds a root of a function using the
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi).
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
/// ├ `c = (a fb - b fa) / (fb - fa)`, `fc = f(c)`
/// ├ converged when `|c - b| < xtol` or `|fc| < ftol`; root = `c`
/// └ `fa * fc < 0` → `(b, fb) = (c, fc)`, else `(a, fa) = (c, fc)`
///
/// The endpoints are not reordered after an update: on convex or concave
/// functions one endpoint stays put for many iterations and convergence
/// degrades toward linear. This is the classic behavior of the method.
///
/// # Errors
///
/// ┌ [`RootFindingError::InvalidBounds`]       - `a` or `b` is NaN/inf.
/// └ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produces NaN or inf.
pub fn false_position<F>(
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
        let c  = secant_x_intercept((br.a, br.fa), (br.b, br.fb));
        let fc = session.eval(c)?;
        trace!(method = %ALGORITHM, iter, a = br.a, b = br.b, c, fc, "step");

        if cfg.residual_converged(fc) {
            return Ok(session.converged(iter, c, fc, br.bounds(), ToleranceSatisfied::Ftol));
        }
        if cfg.width_converged(c, br.b) {
            return Ok(session.converged(iter, c, fc, br.bounds(), ToleranceSatisfied::Xtol));
        }

        if opposite_signs(br.fa, fc) {
            br.b  = c;
            br.fb = fc;
        } else {
            br.a  = c;
            br.fa = fc;
        }
    }

    Ok(session.exhausted(br.b, br.fb, br.bounds()))
}
