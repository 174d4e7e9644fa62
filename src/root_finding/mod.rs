// common helpers
pub mod algorithms;
pub mod bracket;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod report;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod false_position;
pub mod secant;
pub mod dekker;
pub mod ridder;
pub mod brent;
pub mod toms748;
