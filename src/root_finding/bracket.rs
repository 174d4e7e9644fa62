//! Bracket validation and the shared solve-call plumbing.
//!
//! [`validate`] is the single place deciding whether an initial bracket is
//! already solved, ill-posed, or ready for iteration. Every solver calls it
//! exactly once (through [`Session::validate`]) before its loop, so edge-case
//! behavior is identical across methods.
//!
//! ┌ [`Objective`] : wraps `f`, counts evaluations, rejects non-finite values
//! ├ [`Bracket`]   : `(a, b, fa, fb)` with `b` the best estimate
//! └ [`Session`]   : one solve call; builds the [`SolveResult`]

use tracing::debug;
use super::algorithms::Algorithm;
use super::config::RootsCfg;
use super::errors::RootFindingError;
use super::report::{SolveResult, Status, ToleranceSatisfied};
use super::signs::{ensure_b_is_best, same_signs};


/// Function wrapper that counts evaluations and enforces finiteness.
pub(crate) struct Objective<F> {
    func:  F,
    evals: usize,
}

impl<F> Objective<F>
where F: FnMut(f64) -> f64 {
    pub(crate) fn new(func: F) -> Self {
        Self { func, evals: 0 }
    }

    /// Evaluates `f(x)`.
    ///
    /// # Errors
    /// - [`RootFindingError::NonFiniteEvaluation`] if `f(x)` is NaN or ±inf.
    #[inline]
    pub(crate) fn eval(&mut self, x: f64) -> Result<f64, RootFindingError> {
        self.evals += 1;
        let fx = (self.func)(x);
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx });
        }
        Ok(fx)
    }

    #[inline]
    pub(crate) fn evals(&self) -> usize {
        self.evals
    }
}


/// A sign-changing bracket.
///
/// Invariants while iterating: `fa * fb <= 0` and `|fb| <= |fa|`, except
/// where a method documents otherwise (false position skips the ordering,
/// secant drops the sign change).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bracket {
    pub a:  f64,
    pub b:  f64,
    pub fa: f64,
    pub fb: f64,
}

impl Bracket {
    /// Swaps the endpoints if `a` is the better estimate.
    #[inline]
    pub fn order(&mut self) {
        ensure_b_is_best(&mut self.a, &mut self.b, &mut self.fa, &mut self.fb);
    }

    #[inline]
    pub fn bounds(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    #[inline]
    pub fn width(&self) -> f64 {
        (self.b - self.a).abs()
    }
}


/// Outcome of [`validate`].
///
/// ┌ `Solved`       : an endpoint is a root, or the bracket is already narrower than `xtol`
/// ├ `NotBracketed` : `f(a)` and `f(b)` share a sign
/// └ `Continue`     : ordered bracket ready for iteration
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Validation {
    Solved {
        root      : f64,
        residual  : f64,
        bracket   : [f64; 2],
        tolerance : ToleranceSatisfied,
    },
    NotBracketed {
        root     : f64,
        residual : f64,
        bracket  : [f64; 2],
    },
    Continue(Bracket),
}


/// Validates an initial bracket `[a, b]`.
///
/// 1. `fa = f(a)`; `fa == 0` or `|fa| < ftol` → solved at `a`
/// 2. `fb = f(b)`; `fb == 0` or `|fb| < ftol` → solved at `b`
/// 3. `fa * fb > 0` → not bracketed, no further evaluations
/// 4. swap so that `|fb| <= |fa|`
/// 5. `|a - b| < xtol` → solved at `b`
/// 6. otherwise continue with the ordered bracket
///
/// `a` and `b` may be given in either order.
///
/// # Errors
/// - [`RootFindingError::InvalidBounds`]       : `a` or `b` non-finite
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(a)` or `f(b)` non-finite
pub fn validate<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: &RootsCfg,
) -> Result<Validation, RootFindingError>
where F: FnMut(f64) -> f64 {
    check_bounds(a, b)?;
    validate_objective(&mut Objective::new(func), a, b, cfg)
}


#[inline]
fn check_bounds(a: f64, b: f64) -> Result<(), RootFindingError> {
    if !(a.is_finite() && b.is_finite()) {
        return Err(RootFindingError::InvalidBounds { a, b });
    }
    Ok(())
}


fn validate_objective<F>(
    objective: &mut Objective<F>,
    a: f64,
    b: f64,
    cfg: &RootsCfg,
) -> Result<Validation, RootFindingError>
where F: FnMut(f64) -> f64 {
    let fa = objective.eval(a)?;
    if cfg.residual_converged(fa) {
        return Ok(Validation::Solved {
            root      : a,
            residual  : fa,
            bracket   : [a, b],
            tolerance : ToleranceSatisfied::Ftol,
        });
    }

    let fb = objective.eval(b)?;
    if cfg.residual_converged(fb) {
        return Ok(Validation::Solved {
            root      : b,
            residual  : fb,
            bracket   : [a, b],
            tolerance : ToleranceSatisfied::Ftol,
        });
    }

    if same_signs(fa, fb) {
        let (root, residual) = if fa.abs() < fb.abs() { (a, fa) } else { (b, fb) };
        return Ok(Validation::NotBracketed { root, residual, bracket: [a, b] });
    }

    let mut bracket = Bracket { a, b, fa, fb };
    bracket.order();

    if bracket.width() < cfg.xtol() {
        return Ok(Validation::Solved {
            root      : bracket.b,
            residual  : bracket.fb,
            bracket   : bracket.bounds(),
            tolerance : ToleranceSatisfied::Xtol,
        });
    }

    Ok(Validation::Continue(bracket))
}


/// What a solver does after validation.
pub(crate) enum Start {
    Iterate(Bracket),
    Done(SolveResult),
}


/// State of one solve call: the counted objective plus everything the
/// final [`SolveResult`] echoes back.
pub(crate) struct Session<F> {
    objective : Objective<F>,
    algorithm : Algorithm,
    initial   : [f64; 2],
    max_iter  : usize,
}

impl<F> Session<F>
where F: FnMut(f64) -> f64 {
    /// Opens a solve call for `algorithm` on `[a, b]`.
    ///
    /// # Errors
    /// - [`RootFindingError::InvalidBounds`] if `a` or `b` is non-finite.
    pub(crate) fn new(
        algorithm: Algorithm,
        func: F,
        a: f64,
        b: f64,
        cfg: &RootsCfg,
    ) -> Result<Self, RootFindingError> {
        check_bounds(a, b)?;
        Ok(Self {
            objective : Objective::new(func),
            algorithm,
            initial   : [a, b],
            max_iter  : cfg.max_iter(),
        })
    }

    #[inline]
    pub(crate) fn eval(&mut self, x: f64) -> Result<f64, RootFindingError> {
        self.objective.eval(x)
    }

    /// Runs the bracket validator on the initial interval.
    pub(crate) fn validate(&mut self, cfg: &RootsCfg) -> Result<Start, RootFindingError> {
        let [a, b] = self.initial;
        let validation = validate_objective(&mut self.objective, a, b, cfg)?;
        let start = match validation {
            Validation::Continue(bracket) => {
                debug!(
                    method = %self.algorithm,
                    a = bracket.a,
                    b = bracket.b,
                    fa = bracket.fa,
                    fb = bracket.fb,
                    "bracket validated; iterating"
                );
                Start::Iterate(bracket)
            }
            Validation::Solved { root, residual, bracket, tolerance } => {
                Start::Done(self.converged(0, root, residual, bracket, tolerance))
            }
            Validation::NotBracketed { root, residual, bracket } => {
                debug!(method = %self.algorithm, a, b, "initial interval does not bracket the root");
                Start::Done(self.finish(
                    Status::NotBracketed,
                    0,
                    root,
                    residual,
                    bracket,
                    ToleranceSatisfied::NotReached,
                ))
            }
        };
        Ok(start)
    }

    /// Result for a call that met a tolerance during iteration `iterations`.
    pub(crate) fn converged(
        &self,
        iterations: usize,
        root: f64,
        residual: f64,
        bracket: [f64; 2],
        tolerance: ToleranceSatisfied,
    ) -> SolveResult {
        debug!(
            method = %self.algorithm,
            iterations,
            evaluations = self.objective.evals(),
            root,
            residual,
            ?tolerance,
            "converged"
        );
        self.finish(Status::Success, iterations, root, residual, bracket, tolerance)
    }

    /// Result for a call that used its whole iteration budget.
    pub(crate) fn exhausted(&self, root: f64, residual: f64, bracket: [f64; 2]) -> SolveResult {
        debug!(
            method = %self.algorithm,
            max_iter = self.max_iter,
            root,
            residual,
            "iteration budget exhausted"
        );
        self.finish(
            Status::MaxIterationsExceeded,
            self.max_iter,
            root,
            residual,
            bracket,
            ToleranceSatisfied::NotReached,
        )
    }

    fn finish(
        &self,
        status: Status,
        iterations: usize,
        root: f64,
        residual: f64,
        bracket: [f64; 2],
        tolerance_satisfied: ToleranceSatisfied,
    ) -> SolveResult {
        SolveResult {
            status,
            algorithm   : self.algorithm,
            iterations,
            evaluations : self.objective.evals(),
            initial_a   : self.initial[0],
            initial_b   : self.initial[1],
            root,
            residual,
            bracket,
            tolerance_satisfied,
            max_iter    : self.max_iter,
        }
    }
}
