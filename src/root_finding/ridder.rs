//! Ridder's method

use tracing::trace;
use super::algorithms::Algorithm;
use super::bisection::midpoint;
use super::bracket::{Session, Start};
use super::config::RootsCfg;
use super::errors::RootFindingError;
use super::report::{SolveResult, ToleranceSatisfied};
use super::signs::{opposite_signs, sign};

const ALGORITHM: Algorithm = Algorithm::Ridder;


/// Ridder's exponential-fit estimate from `(a, fa)`, `(m, fm)` and `fb`,
/// where `m` is the midpoint of `[a, b]`.
///
/// `c = m + (m - a) sign(fa - fb) fm / sqrt(fm² - fa fb)`
///
/// On a bracket `fa fb <= 0`, so the root is real and `|c - m| <= |m - a|`.
#[inline]
fn ridder_estimate((a, fa): (f64, f64), (m, fm): (f64, f64), fb: f64) -> f64 {
    let d = (fm * fm - fa * fb).sqrt();
    m + (m - a) * sign(fa - fb) * fm / d
}


/// Finds a root using
/// [Ridder's method](https://en.wikipedia.org/wiki/Ridders%27_method).
///
/// # Arguments
/// - `func` : function to evaluate
/// - `a`    : one end of the initial bracket (finite)
/// - `b`    : other end of the initial bracket (finite)
/// - `cfg`  : [`RootsCfg`] (`xtol`, `ftol`, `max_iter`)
///
/// # Behavior
/// Per iteration (two evaluations):
/// - `m = (a + b) / 2`, `fm = f(m)`; converged when `|m - a| < xtol` or
///   `|fm| < ftol`, root = `m`
/// - `c` from the exponential fit through `a`, `m`, `b`; `fc = f(c)`;
///   converged when `|c - b| < xtol` or `|fc| < ftol`, root = `c`
/// - next bracket: `(m, c)` if `fm fc < 0`, else `(a, c)` if `fa fc < 0`,
///   else `(c, b)`
/// - swap so that `|fb| <= |fa|`
///
/// # Notes
/// - Quadratic convergence near simple roots without derivatives, at two
///   evaluations per iteration.
///
/// # Errors
/// - [`RootFindingError::InvalidBounds`]       : `a`/`b` non-finite
/// - [`RootFindingError::NonFiniteEvaluation`] : f(x) produced NaN/inf
pub fn ridder<F>(
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
        let m  = midpoint(br.a, br.b);
        let fm = session.eval(m)?;

        if cfg.residual_converged(fm) {
            return Ok(session.converged(iter, m, fm, br.bounds(), ToleranceSatisfied::Ftol));
        }
        if cfg.width_converged(m, br.a) {
            return Ok(session.converged(iter, m, fm, br.bounds(), ToleranceSatisfied::Xtol));
        }

        let c  = ridder_estimate((br.a, br.fa), (m, fm), br.fb);
        let fc = session.eval(c)?;
        trace!(method = %ALGORITHM, iter, a = br.a, b = br.b, m, c, fc, "step");

        if cfg.residual_converged(fc) {
            return Ok(session.converged(iter, c, fc, br.bounds(), ToleranceSatisfied::Ftol));
        }
        if cfg.width_converged(c, br.b) {
            return Ok(session.converged(iter, c, fc, br.bounds(), ToleranceSatisfied::Xtol));
        }

        if opposite_signs(fm, fc) {
            br.a  = m;
            br.fa = fm;
            br.b  = c;
            br.fb = fc;
        } else if opposite_signs(br.fa, fc) {
            br.b  = c;
            br.fb = fc;
        } else {
            br.a  = c;
            br.fa = fc;
        }
        br.order();
    }

    Ok(session.exhausted(br.b, br.fb, br.bounds()))
}
