//! Alefeld, Potra and Shi's enclosing method (ACM TOMS algorithm 748)
//!
//! Each iteration combines
//! ┌ an inverse cubic interpolation (or a Newton-refined quadratic) step
//! ├ a second interpolation step on the shrunk bracket
//! ├ a double-length secant step from the best endpoint
//! └ a bisection when the bracket has not at least halved
//!
//! so the bracket width shrinks by at least half per iteration while the
//! interpolation steps give superlinear convergence near simple roots.

use tracing::trace;
use super::algorithms::Algorithm;
use super::bisection::midpoint;
use super::bracket::{Bracket, Session, Start};
use super::config::RootsCfg;
use super::errors::RootFindingError;
use super::report::{SolveResult, ToleranceSatisfied};
use super::signs::same_signs;

const ALGORITHM: Algorithm = Algorithm::Toms748;


/// Sorted bracket `a < b` plus the last point dropped from it.
struct Enclosure {
    a:  f64,
    b:  f64,
    fa: f64,
    fb: f64,
    d:  Option<(f64, f64)>,
}

impl Enclosure {
    fn sorted(br: Bracket) -> Self {
        let (a, fa, b, fb) = if br.a < br.b {
            (br.a, br.fa, br.b, br.fb)
        } else {
            (br.b, br.fb, br.a, br.fa)
        };
        Self { a, b, fa, fb, d: None }
    }

    #[inline]
    fn bounds(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    #[inline]
    fn width(&self) -> f64 {
        self.b - self.a
    }

    /// Endpoint with the smaller residual.
    #[inline]
    fn best(&self) -> (f64, f64) {
        if self.fa.abs() < self.fb.abs() {
            (self.a, self.fa)
        } else {
            (self.b, self.fb)
        }
    }

    /// Shrinks the bracket to the side of `c` holding the sign change.
    ///
    /// # Returns
    /// - `Some((root, residual, tolerance))` once `fc` or the new width
    ///   meets a tolerance
    /// - `None` otherwise
    fn insert(&mut self, c: f64, fc: f64, cfg: &RootsCfg) -> Option<(f64, f64, ToleranceSatisfied)> {
        if cfg.residual_converged(fc) {
            return Some((c, fc, ToleranceSatisfied::Ftol));
        }

        // a zero-valued `a` stays put
        if same_signs(self.fa, fc) {
            self.d = Some((self.a, self.fa));
            self.a  = c;
            self.fa = fc;
        } else {
            self.d = Some((self.b, self.fb));
            self.b  = c;
            self.fb = fc;
        }

        if cfg.width_converged(self.a, self.b) {
            let (root, residual) = self.best();
            return Some((root, residual, ToleranceSatisfied::Xtol));
        }
        None
    }
}


/// `c` if it lies strictly inside `(a, b)`, the midpoint otherwise.
///
/// Also catches NaN/inf candidates from degenerate divisions.
#[inline]
fn inside_or_midpoint(c: f64, a: f64, b: f64) -> f64 {
    if a < c && c < b { c } else { midpoint(a, b) }
}


/// Value at zero of the inverse cubic interpolation through
/// `(a, fa)`, `(b, fb)`, `(c, fc)`, `(d, fd)`.
///
/// Computed with the Aitken-Neville scheme; the result may be non-finite
/// when two residuals coincide, which callers reject.
#[inline]
fn inverse_cubic_zero(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
    (c, fc): (f64, f64),
    (d, fd): (f64, f64),
) -> f64 {
    let ab  = (a - b) / (fb - fa);
    let d31 = ab * fb;
    let q31 = ab * fa;
    let bc  = (b - c) / (fc - fb);
    let d21 = bc * fc;
    let q21 = bc * fb;
    let r   = (d31 - q21) / (fc - fa);
    let d32 = r * fc;
    let q32 = r * fa;
    let q11 = (c - d) * fc / (fd - fc);
    let q22 = (d21 - q11) * fb / (fd - fb);
    let q33 = (d32 - q22) * fa / (fd - fa);
    a + (q31 + q32 + q33)
}


/// Root of the quadratic through `(a, fa)`, `(b, fb)`, `(d, fd)`, refined
/// with `steps` Newton iterations started from the endpoint where the
/// quadratic is convex toward zero.
///
/// Falls back to the secant through `a` and `b` (then to the midpoint) when
/// the Newton iterate leaves `(a, b)`.
fn newton_quadratic(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
    (d, fd): (f64, f64),
    steps: usize,
) -> f64 {
    let fab  = (fa - fb) / (a - b);
    let fbd  = (fb - fd) / (b - d);
    let fabd = (fab - fbd) / (a - d);
    let den  = fab - fabd * (a + b);

    let (mut r, mut p) = if fabd * fa > 0.0 { (a, fa) } else { (b, fb) };
    for _ in 0..steps {
        r -= p / (den + 2.0 * fabd * r);
        p = fa + fab * (r - a) + fabd * (r - a) * (r - b);
    }

    if a < r && r < b {
        r
    } else {
        inside_or_midpoint(a - fa / fab, a, b)
    }
}


/// Interpolation step: inverse cubic through `a`, `b`, `d`, `e` when all
/// four points are known and the result lands inside the bracket, else the
/// Newton-refined quadratic through `a`, `b`, `d`.
fn interpolate(enc: &Enclosure, e: Option<(f64, f64)>, newton_steps: usize) -> f64 {
    let ab = ((enc.a, enc.fa), (enc.b, enc.fb));
    match (enc.d, e) {
        (Some(d), Some(e)) => {
            let c = inverse_cubic_zero(ab.0, ab.1, d, e);
            if enc.a < c && c < enc.b {
                c
            } else {
                newton_quadratic(ab.0, ab.1, d, newton_steps)
            }
        }
        (Some(d), None) => newton_quadratic(ab.0, ab.1, d, newton_steps),
        (None, _) => {
            let c = enc.a - enc.fa / (enc.fb - enc.fa) * enc.width();
            inside_or_midpoint(c, enc.a, enc.b)
        }
    }
}


/// Finds a root using Alefeld, Potra and Shi's enclosing method
/// ([ACM TOMS 748](https://doi.org/10.1145/210089.210111)).
///
/// # Arguments
/// - `func` : function to evaluate
/// - `a`    : one end of the initial bracket (finite)
/// - `b`    : other end of the initial bracket (finite)
/// - `cfg`  : [`RootsCfg`] (`xtol`, `ftol`, `max_iter`)
///
/// # Behavior
/// Per iteration (at most four evaluations), on the sorted bracket `a < b`:
/// - `c1` : secant on the first iteration, afterwards inverse cubic
///   interpolation with a two-step Newton quadratic fallback
/// - `c2` : inverse cubic interpolation with a three-step Newton quadratic
///   fallback
/// - `c3` : `u - 2 fu (b - a) / (fb - fa)` from the best endpoint `u`,
///   replaced by the midpoint if `|c3 - u| > (b - a) / 2`
/// - `c4` : midpoint, only if the bracket did not halve this iteration
///
/// After every evaluation the bracket keeps the side with the sign change.
/// Converged when `|f(c)| < ftol` (root = `c`) or `b - a < xtol`
/// (root = endpoint with the smaller residual).
///
/// # Errors
/// - [`RootFindingError::InvalidBounds`]       : `a`/`b` non-finite
/// - [`RootFindingError::NonFiniteEvaluation`] : f(x) produced NaN/inf
pub fn toms748<F>(
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

    let mut enc = Enclosure::sorted(br);
    let mut e: Option<(f64, f64)> = None;

    for iter in 1..=cfg.max_iter() {
        let width_start = enc.width();

        let c  = interpolate(&enc, e, 2);
        let fc = session.eval(c)?;
        e = enc.d;
        if let Some((root, residual, tol)) = enc.insert(c, fc, cfg) {
            return Ok(session.converged(iter, root, residual, enc.bounds(), tol));
        }

        let c  = interpolate(&enc, e, 3);
        let fc = session.eval(c)?;
        if let Some((root, residual, tol)) = enc.insert(c, fc, cfg) {
            return Ok(session.converged(iter, root, residual, enc.bounds(), tol));
        }

        // double-length secant from the best endpoint
        let (u, fu) = enc.best();
        let mut c = u - 2.0 * fu / (enc.fb - enc.fa) * enc.width();
        if 2.0 * (c - u).abs() > enc.width() {
            c = midpoint(enc.a, enc.b);
        }
        let c  = inside_or_midpoint(c, enc.a, enc.b);
        let fc = session.eval(c)?;
        e = enc.d;
        if let Some((root, residual, tol)) = enc.insert(c, fc, cfg) {
            return Ok(session.converged(iter, root, residual, enc.bounds(), tol));
        }

        if 2.0 * enc.width() >= width_start {
            let c  = midpoint(enc.a, enc.b);
            let fc = session.eval(c)?;
            e = enc.d;
            if let Some((root, residual, tol)) = enc.insert(c, fc, cfg) {
                return Ok(session.converged(iter, root, residual, enc.bounds(), tol));
            }
        }
        trace!(method = %ALGORITHM, iter, a = enc.a, b = enc.b, fa = enc.fa, fb = enc.fb, "step");
    }

    let (root, residual) = enc.best();
    Ok(session.exhausted(root, residual, enc.bounds()))
}
