//! Error types for the condition tree crate

use thiserror::Error;

/// Main error type for condition tree construction and configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionTreeError {
    #[error("Unrecognized condition operator: {0}")]
    UnrecognizedOperator(String),

    #[error("Unknown evaluation strategy: {0}")]
    UnknownStrategy(String),
}

/// Result type alias for the condition tree crate
pub type Result<T> = std::result::Result<T, ConditionTreeError>;
