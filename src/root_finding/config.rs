//! Shared configuration for root-finding algorithms.
//!
//! Provides [`RootsCfg`], used by every solver.
//!
//! [`RootsCfg`] fields
//! ├ `xtol`     : minimum meaningful bracket width (or step for secant)
//! ├ `ftol`     : minimum meaningful residual `|f(x)|`
//! └ `max_iter` : iteration budget
//!
//! Either tolerance alone is sufficient to declare convergence, so at least
//! one of them must be `> 0`.
//!
//! [`RootsCfg::new`] initializes configuration with default values; the
//! `set_*` setters validate and return `Result`. Configurations can also be
//! deserialized (e.g. from JSON), passing through the same validation.

use serde::{Deserialize, Serialize};
use super::errors::RootFindingError;


pub const DEFAULT_XTOL     : f64   = 1e-10;
pub const DEFAULT_FTOL     : f64   = 1e-10;
pub const DEFAULT_MAX_ITER : usize = 300;


/// Tolerances and iteration budget for a solve call.
///
/// # Construction
/// - Use [`RootsCfg::new`] then optional setters.
///
/// ```
/// use roots::root_finding::config::RootsCfg;
///
/// let cfg = RootsCfg::new()
///     .set_xtol(1e-12)?
///     .set_ftol(0.0)?
///     .set_max_iter(100)?;
/// assert_eq!(cfg.max_iter(), 100);
/// # Ok::<(), roots::root_finding::errors::RootFindingError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRootsCfg")]
pub struct RootsCfg {
    xtol:     f64,
    ftol:     f64,
    max_iter: usize,
}

impl RootsCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            xtol     : DEFAULT_XTOL,
            ftol     : DEFAULT_FTOL,
            max_iter : DEFAULT_MAX_ITER,
        }
    }

    // getters
    #[inline] #[must_use] pub fn xtol(&self)     -> f64   { self.xtol }
    #[inline] #[must_use] pub fn ftol(&self)     -> f64   { self.ftol }
    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter }

    pub fn set_xtol(mut self, v: f64) -> Result<Self, RootFindingError> {
        if !v.is_finite() || v < 0.0 {
            return Err(RootFindingError::InvalidXtol { got: v });
        }
        if v == 0.0 && self.ftol == 0.0 {
            return Err(RootFindingError::InvalidTolerancePair { xtol: v, ftol: self.ftol });
        }
        self.xtol = v;
        Ok(self)
    }

    pub fn set_ftol(mut self, v: f64) -> Result<Self, RootFindingError> {
        if !v.is_finite() || v < 0.0 {
            return Err(RootFindingError::InvalidFtol { got: v });
        }
        if v == 0.0 && self.xtol == 0.0 {
            return Err(RootFindingError::InvalidTolerancePair { xtol: self.xtol, ftol: v });
        }
        self.ftol = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, RootFindingError> {
        if v == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }

    /// `true` if `|fx|` is small enough to call `x` a root.
    ///
    /// An exact zero always counts, even with `ftol == 0`.
    #[inline]
    pub(crate) fn residual_converged(&self, fx: f64) -> bool {
        fx == 0.0 || fx.abs() < self.ftol
    }

    /// `true` if two abscissae are closer than `xtol`.
    #[inline]
    pub(crate) fn width_converged(&self, x1: f64, x2: f64) -> bool {
        (x1 - x2).abs() < self.xtol
    }
}

impl Default for RootsCfg {
    fn default() -> Self { Self::new() }
}


/// Unvalidated mirror of [`RootsCfg`] used for deserialization.
/// Missing fields take the defaults.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRootsCfg {
    #[serde(default = "default_xtol")]
    xtol: f64,
    #[serde(default = "default_ftol")]
    ftol: f64,
    #[serde(default = "default_max_iter")]
    max_iter: usize,
}

fn default_xtol()     -> f64   { DEFAULT_XTOL }
fn default_ftol()     -> f64   { DEFAULT_FTOL }
fn default_max_iter() -> usize { DEFAULT_MAX_ITER }

impl TryFrom<RawRootsCfg> for RootsCfg {
    type Error = RootFindingError;

    fn try_from(raw: RawRootsCfg) -> Result<Self, Self::Error> {
        RootsCfg::new()
            .set_xtol(raw.xtol)?
            .set_ftol(raw.ftol)?
            .set_max_iter(raw.max_iter)
    }
}
