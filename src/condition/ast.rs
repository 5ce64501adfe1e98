//! Condition tree data model and construction API

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{ConditionTreeError, Result};

/// Custom verification capability for a leaf.
///
/// The verifier receives the leaf it belongs to, so it can read the stored value
/// or ignore it entirely.
pub type Verifier = Arc<dyn Fn(&Leaf) -> bool + Send + Sync>;

/// Node of a condition tree
///
/// Composites own their children exclusively; trees are never shared or cyclic.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Terminal node
    Leaf(Leaf),
    /// True if any child is true
    Or(Vec<Condition>),
    /// True if every child is true
    And(Vec<Condition>),
}

/// Terminal condition holding a boolean value and a verification capability
#[derive(Clone)]
pub struct Leaf {
    value: bool,
    verifier: Option<Verifier>,
}

/// Logical operators of composite conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// OR (||)
    Or,
    /// AND (&&)
    And,
}

impl Leaf {
    /// Leaf whose verification returns `value`
    pub fn new(value: bool) -> Self {
        Self {
            value,
            verifier: None,
        }
    }

    /// Leaf with a custom verification capability
    pub fn with_verifier<F>(value: bool, verifier: F) -> Self
    where
        F: Fn(&Leaf) -> bool + Send + Sync + 'static,
    {
        Self {
            value,
            verifier: Some(Arc::new(verifier)),
        }
    }

    /// Stored value
    #[inline]
    pub fn value(&self) -> bool {
        self.value
    }

    /// Run the verification capability
    #[inline]
    pub fn verify(&self) -> bool {
        match &self.verifier {
            Some(verifier) => verifier(self),
            None => self.value,
        }
    }
}

impl fmt::Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaf")
            .field("value", &self.value)
            .field("custom_verifier", &self.verifier.is_some())
            .finish()
    }
}

impl PartialEq for Leaf {
    fn eq(&self, other: &Self) -> bool {
        let same_verifier = match (&self.verifier, &other.verifier) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        self.value == other.value && same_verifier
    }
}

impl Operator {
    /// Child result that decides the composite without looking further
    #[inline]
    pub fn short_circuit_value(self) -> bool {
        match self {
            Operator::Or => true,
            Operator::And => false,
        }
    }

    /// Result of the operator over an empty child sequence
    #[inline]
    pub fn empty_value(self) -> bool {
        !self.short_circuit_value()
    }
}

impl FromStr for Operator {
    type Err = ConditionTreeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "OR" => Ok(Operator::Or),
            "AND" => Ok(Operator::And),
            _ => Err(ConditionTreeError::UnrecognizedOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Or => f.write_str("OR"),
            Operator::And => f.write_str("AND"),
        }
    }
}

impl Condition {
    /// Composite node tagged with `operator`
    pub fn composite(operator: Operator, children: Vec<Condition>) -> Self {
        match operator {
            Operator::Or => Condition::Or(children),
            Operator::And => Condition::And(children),
        }
    }

    /// Operator of a composite, `None` for leaves
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Condition::Leaf(_) => None,
            Condition::Or(_) => Some(Operator::Or),
            Condition::And(_) => Some(Operator::And),
        }
    }

    /// Children in evaluation order (empty for leaves)
    pub fn children(&self) -> &[Condition] {
        match self {
            Condition::Leaf(_) => &[],
            Condition::Or(children) | Condition::And(children) => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Condition::Leaf(_))
    }

    /// Length of the longest root-to-leaf path; a lone leaf has depth 1
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children().iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Total number of nodes, composites included
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Whether this node needs parentheses when printed as an operand
    fn is_compound(&self) -> bool {
        let mut node = self;
        loop {
            match node.children() {
                [] => return false,
                [only] => node = only,
                _ => return true,
            }
        }
    }
}

impl From<Leaf> for Condition {
    fn from(leaf: Leaf) -> Self {
        Condition::Leaf(leaf)
    }
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        Condition::Leaf(Leaf::new(value))
    }
}

/// Pending output while rendering a tree
enum Piece<'a> {
    Node(&'a Condition),
    Text(&'static str),
}

// Rendered from a heap stack so deep chains print without recursing.
impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];

        while let Some(piece) = pending.pop() {
            let node = match piece {
                Piece::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Piece::Node(node) => node,
            };

            let (operator, separator, children) = match node {
                Condition::Leaf(leaf) => {
                    write!(f, "{}", leaf.value())?;
                    continue;
                }
                Condition::Or(children) => (Operator::Or, " || ", children),
                Condition::And(children) => (Operator::And, " && ", children),
            };

            match children.as_slice() {
                [] => write!(f, "{}", operator.empty_value())?,
                [only] => pending.push(Piece::Node(only)),
                children => {
                    for (i, child) in children.iter().enumerate().rev() {
                        if child.is_compound() {
                            pending.push(Piece::Text(")"));
                            pending.push(Piece::Node(child));
                            pending.push(Piece::Text("("));
                        } else {
                            pending.push(Piece::Node(child));
                        }
                        if i > 0 {
                            pending.push(Piece::Text(separator));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

// Children are unlinked onto a heap stack so dropping a deep chain does not recurse.
impl Drop for Condition {
    fn drop(&mut self) {
        let mut pending = match self {
            Condition::Leaf(_) => return,
            Condition::Or(children) | Condition::And(children) => std::mem::take(children),
        };
        while let Some(mut node) = pending.pop() {
            if let Condition::Or(children) | Condition::And(children) = &mut node {
                pending.append(children);
            }
        }
    }
}

/// Canonical leaf that verifies to `true`
pub fn true_condition() -> Condition {
    Condition::Leaf(Leaf::new(true))
}

/// Canonical leaf that verifies to `false`
pub fn false_condition() -> Condition {
    Condition::Leaf(Leaf::new(false))
}

/// OR composite over `children`; empty and singleton sequences are accepted
pub fn create_or_condition(children: Vec<Condition>) -> Condition {
    Condition::Or(children)
}

/// AND composite over `children`; empty and singleton sequences are accepted
pub fn create_and_condition(children: Vec<Condition>) -> Condition {
    Condition::And(children)
}

/// Composite from an operator tag, exactly `"OR"` or `"AND"`
///
/// Any other tag, lowercase spellings included, is rejected here, so a malformed composite never reaches evaluation.
pub fn create_condition(tag: &str, children: Vec<Condition>) -> Result<Condition> {
    let operator: Operator = tag.parse()?;
    Ok(Condition::composite(operator, children))
}
