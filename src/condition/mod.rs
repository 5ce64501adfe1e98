//! Condition tree construction and evaluation module
//!
//! Trees are built bottom-up from leaves with `create_or_condition` and
//! `create_and_condition`, then evaluated with short-circuit OR/AND semantics.

mod ast;
mod evaluator;

#[cfg(test)]
pub(crate) mod test_support;

pub use ast::*;
pub use evaluator::*;
