//! Sentiment Analysis Dashboard
//!
//! Client-side core of a sentiment-analysis experiment dashboard: a typed client
//! for the training/analysis backend, aggregation of live analysis results into
//! chart tables, and CSV export.

pub mod analysis;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod session;
pub mod testing;
pub mod types;

#[cfg(test)]
mod error_tests;
