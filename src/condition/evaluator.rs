//! Condition evaluator

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::condition::ast::{Condition, Operator};
use crate::config::{EvaluatorConfig, Strategy};

/// Evaluate a condition tree
///
/// OR stops at the first true child and AND at the first false one, children are
/// visited in order. An empty OR is false, an empty AND is true.
pub fn evaluate(condition: &Condition) -> bool {
    match condition {
        Condition::Leaf(leaf) => leaf.verify(),
        Condition::Or(children) => children.iter().any(evaluate),
        Condition::And(children) => children.iter().all(evaluate),
    }
}

/// Open composite during iterative evaluation
struct Frame<'a> {
    operator: Operator,
    remaining: std::slice::Iter<'a, Condition>,
}

enum Step<'a> {
    /// Start evaluating a node
    Visit(&'a Condition),
    /// Pull the next child of a composite
    Resume(Frame<'a>),
    /// A subtree produced a result
    Yield(bool),
}

/// Evaluate a condition tree without native recursion
///
/// Same visit order and short-circuit points as [`evaluate`], so `verify` runs on
/// the same leaves in the same order.
pub fn evaluate_iterative(condition: &Condition) -> bool {
    let mut stack: SmallVec<[Frame<'_>; 16]> = SmallVec::new();
    let mut step = Step::Visit(condition);

    loop {
        step = match step {
            Step::Visit(node) => match node {
                Condition::Leaf(leaf) => Step::Yield(leaf.verify()),
                Condition::Or(children) => Step::Resume(Frame {
                    operator: Operator::Or,
                    remaining: children.iter(),
                }),
                Condition::And(children) => Step::Resume(Frame {
                    operator: Operator::And,
                    remaining: children.iter(),
                }),
            },
            Step::Resume(mut frame) => match frame.remaining.next() {
                Some(child) => {
                    stack.push(frame);
                    Step::Visit(child)
                }
                None => Step::Yield(frame.operator.empty_value()),
            },
            Step::Yield(value) => match stack.pop() {
                None => return value,
                Some(frame) if value == frame.operator.short_circuit_value() => {
                    trace!(
                        operator = %frame.operator,
                        skipped = frame.remaining.len(),
                        "short-circuit"
                    );
                    Step::Yield(value)
                }
                Some(frame) => Step::Resume(frame),
            },
        };
    }
}

/// Reusable evaluator bound to a configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate `condition` with the configured strategy
    pub fn evaluate(&self, condition: &Condition) -> bool {
        let result = match self.config.strategy {
            Strategy::Recursive => evaluate(condition),
            Strategy::Iterative => evaluate_iterative(condition),
        };
        debug!(
            strategy = %self.config.strategy,
            children = condition.children().len(),
            result,
            "evaluated condition tree"
        );
        result
    }
}
