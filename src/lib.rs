//! Condition Tree - short-circuiting evaluator for OR/AND condition trees
//!
//! Leaves carry a boolean value and a verification capability; composites combine
//! their children under OR (any child true) or AND (every child true).
//!
//! ```
//! use condition_tree::{create_and_condition, create_or_condition, evaluate};
//! use condition_tree::{false_condition, true_condition};
//!
//! let tree = create_or_condition(vec![
//!     create_and_condition(vec![true_condition(), false_condition()]),
//!     true_condition(),
//! ]);
//! assert!(evaluate(&tree));
//! ```

pub mod condition;
pub mod config;
pub mod error;

pub use condition::{
    create_and_condition, create_condition, create_or_condition, evaluate, evaluate_iterative,
    false_condition, true_condition, Condition, Evaluator, Leaf, Operator, Verifier,
};
pub use config::{EvaluatorConfig, Strategy};
pub use error::{ConditionTreeError, Result};
