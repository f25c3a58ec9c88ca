//! Foundational types for query translation
//!
//! This module defines:
//! - DocId: string form of a domain object's primary key
//! - Connector: boolean operator joining a composite's children
//! - Operator: leaf comparison operators the index understands
//! - FieldValue: primitive values that cross the index boundary
//! - SortDir / OrderSpec: result ordering

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// DocId
// ============================================================================

/// Identifier joining index results to store records
///
/// Always the string representation of the domain object's primary key.
/// Derivation is pure and stable across the object's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocId(String);

impl DocId {
    /// Create a DocId from any primary-key representation
    pub fn new(pk: impl fmt::Display) -> Self {
        DocId(pk.to_string())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocId {
    fn from(s: &str) -> Self {
        DocId(s.to_string())
    }
}

impl From<String> for DocId {
    fn from(s: String) -> Self {
        DocId(s)
    }
}

impl From<u64> for DocId {
    fn from(pk: u64) -> Self {
        DocId(pk.to_string())
    }
}

impl From<i64> for DocId {
    fn from(pk: i64) -> Self {
        DocId(pk.to_string())
    }
}

// ============================================================================
// Connector
// ============================================================================

/// Boolean operator joining a composite's children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connector {
    /// All children must match
    And,
    /// At least one child must match
    Or,
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connector::And => f.write_str("AND"),
            Connector::Or => f.write_str("OR"),
        }
    }
}

// ============================================================================
// Operator
// ============================================================================

/// Leaf comparison operators supported by the index query language
///
/// Multi-value membership (IN) is not an index operator: the translator
/// expands it into an OR-of-equalities composite before a query is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
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
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operator::Eq => "=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Contains => "~",
            Operator::StartsWith => "^",
        };
        f.write_str(s)
    }
}

// ============================================================================
// FieldValue
// ============================================================================

/// A primitive value the search index understands
///
/// Values are coerced to one of these primitives before they enter a query
/// leaf or a document field. Domain-object references never cross this
/// boundary; they are resolved to their identifier first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Tokenizable text
    Text(String),
    /// Untokenized atomic string (matched whole)
    Atom(String),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Naive ISO-8601 date/datetime string. Timezone handling is the
    /// caller's glue; the index boundary only ever sees naive values.
    Date(String),
    /// List of strings; stored pipe-joined in a document field
    List(Vec<String>),
    /// Arbitrary JSON payload; stored serialized in a document field
    Json(serde_json::Value),
    /// Absent value
    Null,
}

impl FieldValue {
    /// Render the value as a query-string literal
    ///
    /// String-like values are double-quoted; numerics and booleans are
    /// rendered bare.
    pub fn to_literal(&self) -> String {
        match self {
            FieldValue::Text(s) | FieldValue::Atom(s) | FieldValue::Date(s) => {
                format!("\"{}\"", s)
            }
            FieldValue::Int(i) => i.to_string(),
            FieldValue::Float(x) => x.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::List(items) => format!("\"{}\"", items.join("|")),
            FieldValue::Json(v) => format!("\"{}\"", v),
            FieldValue::Null => "NULL".to_string(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_literal())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        FieldValue::Float(x)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

// ============================================================================
// Ordering
// ============================================================================

/// Sort direction for an ordering field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDir {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

/// A single ordering term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSpec {
    /// Field to order by
    pub field: String,
    /// Sort direction
    pub dir: SortDir,
}

impl OrderSpec {
    /// Parse an ordering term; a leading `-` means descending
    pub fn parse(term: &str) -> Self {
        match term.strip_prefix('-') {
            Some(field) => OrderSpec {
                field: field.to_string(),
                dir: SortDir::Desc,
            },
            None => OrderSpec {
                field: term.to_string(),
                dir: SortDir::Asc,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_id_from_integer_pk() {
        let id = DocId::from(42u64);
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_doc_id_equality() {
        assert_eq!(DocId::from("7"), DocId::from(7i64));
    }

    #[test]
    fn test_connector_display() {
        assert_eq!(Connector::And.to_string(), "AND");
        assert_eq!(Connector::Or.to_string(), "OR");
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(Operator::Eq.to_string(), "=");
        assert_eq!(Operator::Gte.to_string(), ">=");
        assert_eq!(Operator::Contains.to_string(), "~");
    }

    #[test]
    fn test_field_value_literals() {
        assert_eq!(FieldValue::Text("abc".into()).to_literal(), "\"abc\"");
        assert_eq!(FieldValue::Int(5).to_literal(), "5");
        assert_eq!(FieldValue::Bool(true).to_literal(), "true");
        assert_eq!(
            FieldValue::List(vec!["a".into(), "b".into()]).to_literal(),
            "\"a|b\""
        );
    }

    #[test]
    fn test_order_spec_parse() {
        let asc = OrderSpec::parse("name");
        assert_eq!(asc.field, "name");
        assert_eq!(asc.dir, SortDir::Asc);

        let desc = OrderSpec::parse("-created");
        assert_eq!(desc.field, "created");
        assert_eq!(desc.dir, SortDir::Desc);
    }
}
