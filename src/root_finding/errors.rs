//! Root-finding error types.
//!
//! Statuses (`Success`, `NotBracketed`, `MaxIterationsExceeded`) are never
//! errors; they travel inside [`SolveResult`](super::report::SolveResult).
//! [`RootFindingError`] only covers calls the statuses cannot describe:
//!
//! ┌ invalid bracket endpoints (non-finite)
//! ├ invalid configuration (`xtol`, `ftol`, `max_iter`)
//! └ non-finite function evaluation


use thiserror::Error;


/// Root-finding misuse and runtime errors.
///
/// ┌ Non-finite bracket endpoints
/// ├ Invalid tolerances or iteration budget
/// └ `f(x)` returned NaN or ±inf
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RootFindingError {
    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid `xtol` tolerance: must be finite and >= 0. got {got}")]
    InvalidXtol { got: f64 },

    #[error("invalid `ftol` tolerance: must be finite and >= 0. got {got}")]
    InvalidFtol { got: f64 },

    #[error("either `xtol` or `ftol` must be > 0. got {xtol} and {ftol}")]
    InvalidTolerancePair { xtol: f64, ftol: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },
}
