//! Bracketed scalar root finding.
//!
//! Every solver in [`root_finding`] shares one contract: validate the
//! initial bracket `[a, b]`, iterate while the sign change is preserved,
//! and return a [`root_finding::report::SolveResult`] whose status is
//! `Success`, `NotBracketed` or `MaxIterationsExceeded`.

pub mod root_finding;
