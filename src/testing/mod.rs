//! Test data generation
//!
//! Synthetic analysis results for tests and the offline `summarize --demo` mode.

pub mod generators;

pub use generators::ResultGenerator;
