//! Evaluator configuration

use std::fmt;
use std::str::FromStr;

use crate::error::{ConditionTreeError, Result};

/// Environment variable selecting the evaluation strategy
pub const STRATEGY_ENV_VAR: &str = "CONDITION_TREE_STRATEGY";

/// Tree traversal strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Native recursion; depth bounded by the thread stack
    #[default]
    Recursive,
    /// Explicit heap stack; depth bounded by memory
    Iterative,
}

impl FromStr for Strategy {
    type Err = ConditionTreeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "recursive" => Ok(Strategy::Recursive),
            "iterative" => Ok(Strategy::Iterative),
            _ => Err(ConditionTreeError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Recursive => f.write_str("recursive"),
            Strategy::Iterative => f.write_str("iterative"),
        }
    }
}

/// Evaluator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvaluatorConfig {
    pub strategy: Strategy,
}

impl EvaluatorConfig {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Read the strategy from `CONDITION_TREE_STRATEGY`, defaulting when unset
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var(STRATEGY_ENV_VAR).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Result<Self> {
        let strategy = match value {
            Some(name) => name.parse()?,
            None => Strategy::default(),
        };
        Ok(Self { strategy })
    }
}
