//! Relational filter trees and their translation into query trees
//!
//! This module defines:
//! - FilterNode / FilterValue / FilterOp: the relational-side filter
//!   representation, mapped into the core's [`QueryNode`] at the boundary
//! - `translate`: the conversion itself, including IN-expansion,
//!   empty-composite dropping and single-child-AND collapsing
//!
//! Negation is explicitly unsupported. A negated node anywhere in the tree
//! fails translation: silently dropping the negation would produce a
//! broader-than-intended result set.

use bridgewalk_core::{Connector, DocId, Error, FieldValue, Operator, QueryNode, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// FilterValue
// ============================================================================

/// A value on the relational side of a filter
///
/// Unlike [`FieldValue`], a filter value may reference a domain object or
/// carry the multi-value payload of an IN comparison. Both are resolved
/// away during translation; neither crosses into a query leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    /// An index primitive, used as-is
    Value(FieldValue),
    /// A reference to a domain object; resolves to its identifier
    Ref(DocId),
    /// The value list of an IN comparison
    Many(Vec<FilterValue>),
}

impl FilterValue {
    /// Resolve to the primitive the index understands
    ///
    /// Object references become their identifier string. Multi-value
    /// payloads are handled by IN-expansion before this is called; one
    /// reaching here is a malformed filter.
    fn resolve(&self) -> Result<FieldValue> {
        match self {
            FilterValue::Value(v) => Ok(v.clone()),
            FilterValue::Ref(id) => Ok(FieldValue::Atom(id.to_string())),
            FilterValue::Many(_) => Err(Error::InvalidFilter(
                "multi-value payload outside an IN comparison".to_string(),
            )),
        }
    }
}

impl From<FieldValue> for FilterValue {
    fn from(v: FieldValue) -> Self {
        FilterValue::Value(v)
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Value(FieldValue::Text(s.to_string()))
    }
}

impl From<i64> for FilterValue {
    fn from(i: i64) -> Self {
        FilterValue::Value(FieldValue::Int(i))
    }
}

// ============================================================================
// FilterOp
// ============================================================================

/// Comparison operators accepted on the relational side
///
/// `In` has no index counterpart; translation expands it into an
/// OR-of-equalities composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOp {
    /// Exact equality
    Eq,
    /// Greater than
    Gt,
    /// Greater than or equal
    Gte,
    /// Less than
    Lt,
    /// Less than or equal
    Lte,
    /// Substring / token containment
    Contains,
    /// Prefix match
    StartsWith,
    /// Membership in a value list
    In,
}

impl FilterOp {
    /// The index operator this maps to, if it maps 1:1
    fn as_operator(self) -> Option<Operator> {
        match self {
            FilterOp::Eq => Some(Operator::Eq),
            FilterOp::Gt => Some(Operator::Gt),
            FilterOp::Gte => Some(Operator::Gte),
            FilterOp::Lt => Some(Operator::Lt),
            FilterOp::Lte => Some(Operator::Lte),
            FilterOp::Contains => Some(Operator::Contains),
            FilterOp::StartsWith => Some(Operator::StartsWith),
            FilterOp::In => None,
        }
    }
}

// ============================================================================
// FilterNode
// ============================================================================

/// A node in a relational filter tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterNode {
    /// A single field comparison
    Leaf {
        /// Field name on the relational side
        field: String,
        /// Comparison operator
        op: FilterOp,
        /// Comparison value
        value: FilterValue,
    },
    /// A boolean combination of child filters
    Composite {
        /// Boolean operator joining the children
        connector: Connector,
        /// Whether the combination is negated. Unsupported: translation
        /// fails when set.
        negated: bool,
        /// Child filters
        children: Vec<FilterNode>,
    },
}

impl FilterNode {
    /// A leaf comparison
    pub fn leaf(field: impl Into<String>, op: FilterOp, value: impl Into<FilterValue>) -> Self {
        FilterNode::Leaf {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Shorthand for an equality leaf
    pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        FilterNode::leaf(field, FilterOp::Eq, value)
    }

    /// Shorthand for an IN leaf
    pub fn is_in<V: Into<FilterValue>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        FilterNode::leaf(
            field,
            FilterOp::In,
            FilterValue::Many(values.into_iter().map(Into::into).collect()),
        )
    }

    /// An AND combination
    pub fn and(children: Vec<FilterNode>) -> Self {
        FilterNode::Composite {
            connector: Connector::And,
            negated: false,
            children,
        }
    }

    /// An OR combination
    pub fn or(children: Vec<FilterNode>) -> Self {
        FilterNode::Composite {
            connector: Connector::Or,
            negated: false,
            children,
        }
    }

    /// Mark this combination negated
    ///
    /// Negated trees are rejected by [`translate`]; the flag exists so
    /// that an upstream representation carrying negation can be mapped
    /// faithfully and then fail fast.
    pub fn negate(self) -> Self {
        match self {
            FilterNode::Composite {
                connector,
                children,
                ..
            } => FilterNode::Composite {
                connector,
                negated: true,
                children,
            },
            leaf @ FilterNode::Leaf { .. } => FilterNode::Composite {
                connector: Connector::And,
                negated: true,
                children: vec![leaf],
            },
        }
    }
}

// ============================================================================
// Translation
// ============================================================================

/// Translate a relational filter tree into a search query tree
///
/// Returns `Ok(None)` when the filter places no constraint at all (a
/// composite whose children all translated to nothing).
///
/// Rules:
/// - a leaf maps 1:1, with object references resolved to identifiers
/// - `In` with N values expands into an OR composite of equality leaves
/// - children that translate to nothing are dropped; a composite left
///   with no children translates to nothing itself, never to an empty
///   composite
/// - an AND composite left with exactly one child collapses to that child
/// - any negated node fails with [`Error::UnsupportedNegation`]
pub fn translate(filter: &FilterNode) -> Result<Option<QueryNode>> {
    match filter {
        FilterNode::Leaf { field, op, value } => translate_leaf(field, *op, value),
        FilterNode::Composite {
            connector,
            negated,
            children,
        } => {
            if *negated {
                return Err(Error::UnsupportedNegation);
            }

            let mut translated = Vec::with_capacity(children.len());
            for child in children {
                if let Some(node) = translate(child)? {
                    translated.push(node);
                }
            }

            Ok(match (translated.len(), connector) {
                (0, _) => None,
                (1, Connector::And) => Some(translated.remove(0)),
                _ => Some(QueryNode::Composite {
                    connector: *connector,
                    children: translated,
                    inverted: false,
                }),
            })
        }
    }
}

fn translate_leaf(field: &str, op: FilterOp, value: &FilterValue) -> Result<Option<QueryNode>> {
    match op.as_operator() {
        Some(op) => Ok(Some(QueryNode::Leaf {
            field: field.to_string(),
            op,
            value: value.resolve()?,
        })),
        // IN expands into OR-of-equalities
        None => {
            let values = match value {
                FilterValue::Many(values) => values,
                other => {
                    return Err(Error::InvalidFilter(format!(
                        "IN comparison on {:?} requires a value list, got {:?}",
                        field, other
                    )))
                }
            };

            let mut leaves = Vec::with_capacity(values.len());
            for v in values {
                leaves.push(QueryNode::Leaf {
                    field: field.to_string(),
                    op: Operator::Eq,
                    value: v.resolve()?,
                });
            }

            Ok(match leaves.len() {
                0 => None,
                1 => Some(leaves.remove(0)),
                _ => Some(QueryNode::or(leaves)),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_leaf_one_to_one() {
        let filter = FilterNode::eq("name", "ada");
        let tree = translate(&filter).unwrap().unwrap();
        assert_eq!(tree, QueryNode::leaf("name", Operator::Eq, "ada"));
    }

    #[test]
    fn test_translate_resolves_object_references() {
        let filter = FilterNode::leaf("owner", FilterOp::Eq, FilterValue::Ref(DocId::from(42u64)));
        let tree = translate(&filter).unwrap().unwrap();
        assert_eq!(
            tree,
            QueryNode::leaf("owner", Operator::Eq, FieldValue::Atom("42".into()))
        );
    }

    #[test]
    fn test_translate_in_expansion() {
        let filter = FilterNode::is_in("email", ["a", "b"]);
        let tree = translate(&filter).unwrap().unwrap();
        assert_eq!(
            tree,
            QueryNode::or(vec![
                QueryNode::leaf("email", Operator::Eq, "a"),
                QueryNode::leaf("email", Operator::Eq, "b"),
            ])
        );
    }

    #[test]
    fn test_translate_in_single_value_collapses_to_leaf() {
        let filter = FilterNode::is_in("email", ["a"]);
        let tree = translate(&filter).unwrap().unwrap();
        assert_eq!(tree, QueryNode::leaf("email", Operator::Eq, "a"));
    }

    #[test]
    fn test_translate_in_empty_list_is_no_constraint() {
        let filter = FilterNode::is_in("email", Vec::<&str>::new());
        assert_eq!(translate(&filter).unwrap(), None);
    }

    #[test]
    fn test_translate_in_requires_value_list() {
        let filter = FilterNode::leaf("email", FilterOp::In, "a");
        assert!(matches!(
            translate(&filter),
            Err(Error::InvalidFilter(_))
        ));
    }

    #[test]
    fn test_translate_empty_composite_drops() {
        let filter = FilterNode::and(vec![]);
        assert_eq!(translate(&filter).unwrap(), None);
    }

    #[test]
    fn test_translate_all_children_empty_drops() {
        // Children that translate to nothing never leave behind an empty
        // composite.
        let filter = FilterNode::or(vec![FilterNode::and(vec![]), FilterNode::and(vec![])]);
        assert_eq!(translate(&filter).unwrap(), None);
    }

    #[test]
    fn test_translate_single_child_and_collapses() {
        let filter = FilterNode::and(vec![FilterNode::eq("a", 1i64)]);
        let tree = translate(&filter).unwrap().unwrap();
        assert_eq!(tree, QueryNode::leaf("a", Operator::Eq, 1i64));
    }

    #[test]
    fn test_translate_single_child_or_is_kept_as_composite() {
        let filter = FilterNode::or(vec![FilterNode::eq("a", 1i64)]);
        let tree = translate(&filter).unwrap().unwrap();
        assert_eq!(tree.connector(), Some(Connector::Or));
    }

    #[test]
    fn test_translate_nested_composites() {
        let filter = FilterNode::and(vec![
            FilterNode::leaf("age", FilterOp::Gte, 21i64),
            FilterNode::or(vec![
                FilterNode::eq("city", "london"),
                FilterNode::eq("city", "madrid"),
            ]),
        ]);
        let tree = translate(&filter).unwrap().unwrap();
        assert_eq!(tree.connector(), Some(Connector::And));
        assert_eq!(tree.leaf_count(), 3);
    }

    #[test]
    fn test_translate_rejects_negation() {
        let filter = FilterNode::or(vec![FilterNode::eq("a", 1i64)]).negate();
        assert!(matches!(
            translate(&filter),
            Err(Error::UnsupportedNegation)
        ));
    }

    #[test]
    fn test_translate_rejects_nested_negation() {
        let filter = FilterNode::and(vec![
            FilterNode::eq("a", 1i64),
            FilterNode::eq("b", 2i64).negate(),
        ]);
        assert!(matches!(
            translate(&filter),
            Err(Error::UnsupportedNegation)
        ));
    }
}
