//! Configuration module
//!
//! Holds the evaluator settings and their environment overrides.

mod evaluator;

pub use evaluator::*;
