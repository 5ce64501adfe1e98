//! Shared fixtures for condition tests

use crate::condition::ast::{
    create_and_condition, create_or_condition, false_condition, true_condition, Condition,
};

/// `(true && (false || false)) || (true && false && (false || true)) || (((true || true) && false) && false)`
///
/// Evaluates to `false`.
pub(crate) fn reference_tree() -> Condition {
    create_or_condition(vec![
        create_and_condition(vec![
            true_condition(),
            create_or_condition(vec![false_condition(), false_condition()]),
        ]),
        create_and_condition(vec![
            true_condition(),
            false_condition(),
            create_or_condition(vec![false_condition(), true_condition()]),
        ]),
        create_and_condition(vec![
            create_and_condition(vec![
                create_or_condition(vec![true_condition(), true_condition()]),
                false_condition(),
            ]),
            false_condition(),
        ]),
    ])
}
