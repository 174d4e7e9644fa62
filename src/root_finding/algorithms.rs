//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! and [`Algorithm::solve`], the uniform entry point dispatching to them.
//! Every method shares the entry contract
//! `(func, a, b, cfg) -> Result<SolveResult, RootFindingError>`.

use serde::Serialize;
use super::config::RootsCfg;
use super::errors::RootFindingError;
use super::report::SolveResult;
use super::{bisection, brent, dekker, false_position, ridder, secant, toms748};


/// Root-finding algorithm variants.
/// - [`Algorithm::Bisection`]     : halve the bracket every step
/// - [`Algorithm::FalsePosition`] : secant through both bracket endpoints
/// - [`Algorithm::Secant`]        : secant iteration from a validated bracket
/// - [`Algorithm::Dekker`]        : secant safeguarded by bisection
/// - [`Algorithm::Ridder`]        : exponential fit through a, midpoint, b
/// - [`Algorithm::Brent`]         : Dekker plus inverse quadratic interpolation
/// - [`Algorithm::Toms748`]       : Alefeld–Potra–Shi enclosing method
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    Bisection,
    FalsePosition,
    Secant,
    Dekker,
    Ridder,
    Brent,
    Toms748,
}

impl Algorithm {
    /// Every variant, in the order they are documented.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bisection,
        Algorithm::FalsePosition,
        Algorithm::Secant,
        Algorithm::Dekker,
        Algorithm::Ridder,
        Algorithm::Brent,
        Algorithm::Toms748,
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection     => "bisection",
            Algorithm::FalsePosition => "false_position",
            Algorithm::Secant        => "secant",
            Algorithm::Dekker        => "dekker",
            Algorithm::Ridder        => "ridder",
            Algorithm::Brent         => "brent",
            Algorithm::Toms748       => "toms748",
        }
    }

    /// Upper bound on calls to `f` per loop iteration.
    ///
    /// A solve call evaluates `f` at most
    /// `evaluations_per_iteration() * max_iter + 2` times.
    pub const fn evaluations_per_iteration(self) -> usize {
        match self {
            Algorithm::Ridder  => 2,
            Algorithm::Toms748 => 4,
            _                  => 1,
        }
    }

    /// `true` for methods that keep `f(a) * f(b) <= 0` after every iteration.
    pub const fn preserves_bracket(self) -> bool {
        !matches!(self, Algorithm::Secant)
    }

    /// Solves `func(x) = 0` on `[a, b]` with this method.
    ///
    /// See the per-method functions (e.g. [`bisection::bisection`]) for details.
    pub fn solve<F>(
        self,
        func: F,
        a: f64,
        b: f64,
        cfg: &RootsCfg,
    ) -> Result<SolveResult, RootFindingError>
    where F: FnMut(f64) -> f64 {
        match self {
            Algorithm::Bisection     => bisection::bisection(func, a, b, cfg),
            Algorithm::FalsePosition => false_position::false_position(func, a, b, cfg),
            Algorithm::Secant        => secant::secant(func, a, b, cfg),
            Algorithm::Dekker        => dekker::dekker(func, a, b, cfg),
            Algorithm::Ridder        => ridder::ridder(func, a, b, cfg),
            Algorithm::Brent         => brent::brent(func, a, b, cfg),
            Algorithm::Toms748       => toms748::toms748(func, a, b, cfg),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
