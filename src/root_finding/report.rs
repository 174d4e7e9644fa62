//! Defines the [`SolveResult`] struct returned by all
//! root-finding algorithms, and its human-readable report.

use std::fmt;
use serde::Serialize;
use super::algorithms::Algorithm;


/// Line prefix shared by the report and the diagnostics collaborator.
pub const TAG: &str = "(roots)";


/// Terminal status of a solve call.
///
/// Always returned inside [`SolveResult`], never raised as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Success,
    NotBracketed,
    MaxIterationsExceeded,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        self == Status::Success
    }

    /// Process exit code used by the escalation policy.
    pub const fn exit_code(self) -> i32 {
        match self {
            Status::Success               => 0,
            Status::NotBracketed          => 1,
            Status::MaxIterationsExceeded => 2,
        }
    }
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::Ftol`]
///     - |f(root)| < ftol, or f(root) is exactly zero
/// - [`ToleranceSatisfied::Xtol`]
///     - bracket width (or step) < xtol
/// - [`ToleranceSatisfied::NotReached`]
///     - usually with [`Status::MaxIterationsExceeded`] or [`Status::NotBracketed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToleranceSatisfied {
    Ftol,
    Xtol,
    NotReached,
}


/// Final result returned by all root-finding algorithms.
///
/// [`SolveResult`]
/// - `status`              : terminal [`Status`]
/// - `algorithm`           : method that produced the result
/// - `iterations`          : loop iterations, 0 if validation settled the call
/// - `evaluations`         : total calls to `f`
/// - `initial_a`           : `a` exactly as passed by the caller
/// - `initial_b`           : `b` exactly as passed by the caller
/// - `root`                : best root estimate
/// - `residual`            : `f(root)`
/// - `bracket`             : last `[a, b]` pair held by the solver
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `max_iter`            : iteration budget the call ran with
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolveResult {
    pub status              : Status,
    pub algorithm           : Algorithm,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub initial_a           : f64,
    pub initial_b           : f64,
    pub root                : f64,
    pub residual            : f64,
    pub bracket             : [f64; 2],
    pub tolerance_satisfied : ToleranceSatisfied,
    pub max_iter            : usize,
}

impl SolveResult {
    /// Algorithm name (e.g. `"bisection"`).
    #[inline]
    pub fn method_name(&self) -> &'static str {
        self.algorithm.algorithm_name()
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Fixed failure message for non-success statuses.
    pub fn error_message(&self) -> Option<String> {
        match self.status {
            Status::Success               => None,
            Status::NotBracketed          => Some(
                "Initial interval does not bracket the root.".to_string()
            ),
            Status::MaxIterationsExceeded => Some(
                format!("Maximum number of iterations ({}) exceeded.", self.max_iter)
            ),
        }
    }

    /// Human-readable report of this result.
    ///
    /// ```text
    /// (roots) Root-finding information:
    /// (roots)             Method : bisection
    /// (roots)   Initial interval : [+2.000000000000000e+02, +0.000000000000000e+00]
    /// (roots)             Status : Success
    /// (roots)         Iterations : 41
    /// (roots)               Root : 1.234000000022206e+00
    /// (roots)           Residual : 2.492294786549603e-09
    /// ```
    pub fn info(&self) -> RootsInfo<'_> {
        RootsInfo { result: self }
    }
}


/// [`fmt::Display`] adapter produced by [`SolveResult::info`].
pub struct RootsInfo<'a> {
    result: &'a SolveResult,
}

impl fmt::Display for RootsInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        writeln!(f, "{TAG} Root-finding information:")?;
        writeln!(f, "{TAG}   {:>16} : {}", "Method", r.method_name())?;
        writeln!(
            f,
            "{TAG}   {:>16} : [{}, {}]",
            "Initial interval",
            signed_sci(r.initial_a),
            signed_sci(r.initial_b),
        )?;

        match r.error_message() {
            None => {
                writeln!(f, "{TAG}   {:>16} : Success", "Status")?;
                writeln!(f, "{TAG}   {:>16} : {}", "Iterations", r.iterations)?;
                writeln!(f, "{TAG}   {:>16} : {}", "Root", sci(r.root))?;
                writeln!(f, "{TAG}   {:>16} : {}", "Residual", sci(r.residual))
            }
            Some(message) => {
                writeln!(f, "{TAG}   {:>16} : Failure", "Status")?;
                writeln!(f, "{TAG}   {:>16} : {}", "Error message", message)
            }
        }
    }
}


/// `x` in scientific notation with 15 mantissa digits and a signed exponent of
/// at least two digits (`1.234000000000000e+00`).
pub fn sci(x: f64) -> String {
    if !x.is_finite() {
        return format!("{x}");
    }
    let formatted = format!("{x:.15e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        None => formatted,
    }
}

/// Like [`sci`] but always with an explicit leading sign, the sign being
/// `+` for every `x >= 0` (including `-0.0`).
pub fn signed_sci(x: f64) -> String {
    let sign = if x >= 0.0 { '+' } else { '-' };
    format!("{sign}{}", sci(x.abs()))
}
