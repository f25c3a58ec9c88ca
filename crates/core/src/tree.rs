//! The search-side boolean query tree
//!
//! This module defines:
//! - QueryNode: tagged union over leaf predicates and boolean composites
//! - Merging of trees under a caller-chosen connector
//! - Rendering into the index's native query-string syntax
//!
//! The tree is owned entirely by this crate. External filter
//! representations are mapped into it at the boundary; the external types
//! never appear here.

use crate::types::{Connector, FieldValue, Operator};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// QueryNode
// ============================================================================

/// A node in the search query tree
///
/// Trees are immutable once built. Narrowing an existing query clones and
/// merges rather than mutating, so previously built trees remain valid
/// snapshots and can be reused as the base of several narrowings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryNode {
    /// A single field/operator/value predicate
    Leaf {
        /// Document field the predicate applies to
        field: String,
        /// Comparison operator
        op: Operator,
        /// Comparison value, already coerced to an index primitive
        value: FieldValue,
    },
    /// A boolean combination of child nodes
    Composite {
        /// Boolean operator joining the children
        connector: Connector,
        /// Child nodes; order carries no meaning
        children: Vec<QueryNode>,
        /// Reserved for negation. Must be false: negation is unsupported
        /// and the translator fails fast rather than mis-translating.
        inverted: bool,
    },
}

impl QueryNode {
    /// Construct a leaf predicate
    pub fn leaf(field: impl Into<String>, op: Operator, value: impl Into<FieldValue>) -> Self {
        QueryNode::Leaf {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Construct an AND composite
    pub fn and(children: Vec<QueryNode>) -> Self {
        QueryNode::Composite {
            connector: Connector::And,
            children,
            inverted: false,
        }
    }

    /// Construct an OR composite
    pub fn or(children: Vec<QueryNode>) -> Self {
        QueryNode::Composite {
            connector: Connector::Or,
            children,
            inverted: false,
        }
    }

    /// Merge a new tree into an optional existing tree
    ///
    /// With no existing tree the new tree becomes the whole query.
    /// Otherwise the two are combined under `connector` — the caller's
    /// connector governs, never a hardwired AND, so repeated disjunctive
    /// narrowing is not corrupted into a conjunction.
    pub fn merge(existing: Option<QueryNode>, new: QueryNode, connector: Connector) -> QueryNode {
        match existing {
            None => new,
            Some(tree) => QueryNode::Composite {
                connector,
                children: vec![tree, new],
                inverted: false,
            },
        }
    }

    /// Whether this node is a composite
    pub fn is_composite(&self) -> bool {
        matches!(self, QueryNode::Composite { .. })
    }

    /// The connector at the root, if this node is a composite
    pub fn connector(&self) -> Option<Connector> {
        match self {
            QueryNode::Composite { connector, .. } => Some(*connector),
            QueryNode::Leaf { .. } => None,
        }
    }

    /// Total number of leaves in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            QueryNode::Leaf { .. } => 1,
            QueryNode::Composite { children, .. } => {
                children.iter().map(QueryNode::leaf_count).sum()
            }
        }
    }
}

impl fmt::Display for QueryNode {
    /// Render the tree in the index's native parenthesized query syntax
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryNode::Leaf { field, op, value } => {
                write!(f, "{} {} {}", field, op, value)
            }
            QueryNode::Composite {
                connector,
                children,
                inverted,
            } => {
                if *inverted {
                    // Reserved: translation rejects inverted trees before
                    // they can reach rendering.
                    f.write_str("NOT ")?;
                }
                f.write_str("(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", connector)?;
                    }
                    write!(f, "{}", child)?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_on_empty_is_identity() {
        let tree = QueryNode::leaf("email", Operator::Eq, "a@example.com");
        let merged = QueryNode::merge(None, tree.clone(), Connector::And);
        assert_eq!(merged, tree);
    }

    #[test]
    fn test_merge_combines_under_given_connector() {
        let a = QueryNode::leaf("a", Operator::Eq, 1i64);
        let b = QueryNode::leaf("b", Operator::Eq, 2i64);

        let merged = QueryNode::merge(Some(a.clone()), b.clone(), Connector::Or);
        assert_eq!(merged.connector(), Some(Connector::Or));
        assert_eq!(merged, QueryNode::or(vec![a, b]));
    }

    #[test]
    fn test_merge_connector_fidelity() {
        let a = QueryNode::leaf("a", Operator::Eq, 1i64);
        let b = QueryNode::leaf("b", Operator::Eq, 2i64);

        let or = QueryNode::merge(Some(a.clone()), b.clone(), Connector::Or);
        let and = QueryNode::merge(Some(a), b, Connector::And);
        assert_ne!(or, and);
    }

    #[test]
    fn test_leaf_count() {
        let tree = QueryNode::and(vec![
            QueryNode::leaf("a", Operator::Eq, 1i64),
            QueryNode::or(vec![
                QueryNode::leaf("b", Operator::Eq, 2i64),
                QueryNode::leaf("c", Operator::Eq, 3i64),
            ]),
        ]);
        assert_eq!(tree.leaf_count(), 3);
    }

    #[test]
    fn test_display_renders_parenthesized() {
        let tree = QueryNode::or(vec![
            QueryNode::leaf("email", Operator::Eq, "a"),
            QueryNode::leaf("email", Operator::Eq, "b"),
        ]);
        assert_eq!(tree.to_string(), "(email = \"a\" OR email = \"b\")");
    }

    #[test]
    fn test_display_nested() {
        let tree = QueryNode::and(vec![
            QueryNode::leaf("age", Operator::Gte, 21i64),
            QueryNode::or(vec![
                QueryNode::leaf("name", Operator::Contains, "jo"),
                QueryNode::leaf("name", Operator::StartsWith, "an"),
            ]),
        ]);
        assert_eq!(
            tree.to_string(),
            "(age >= 21 AND (name ~ \"jo\" OR name ^ \"an\"))"
        );
    }
}
