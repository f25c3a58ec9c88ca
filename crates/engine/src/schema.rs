//! Statically declared document schemas
//!
//! A schema maps domain field names to the search primitive they are
//! stored as and, for text fields, the token strategy applied at index
//! time. Schemas are declared once at setup and resolved there, never
//! per record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// FieldKind
// ============================================================================

/// The search primitive a field is stored as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Tokenizable text
    Text,
    /// Untokenized atomic string
    Atom,
    /// Signed integer
    Int,
    /// Floating point number
    Float,
    /// Boolean
    Bool,
    /// Naive date/datetime
    Date,
}

// ============================================================================
// ValueShape
// ============================================================================

/// The domain-side shape a stored field decodes back into
///
/// String-like primitives can carry more than a scalar: lists join with
/// `|` and JSON payloads serialize to text. The shape records which
/// inverse applies when a document is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueShape {
    /// One value of the field's kind
    Scalar,
    /// A `|`-joined list of strings
    List,
    /// A serialized JSON payload
    Json,
}

// ============================================================================
// TokenStrategy
// ============================================================================

/// How a text field is expanded into index tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenStrategy {
    /// All prefixes of each word and of the compacted string
    Prefix,
    /// Every contiguous substring of each word and of the compacted string
    Substring,
    /// The first character of each non-stopword word
    FirstLetter,
}

// ============================================================================
// FieldSpec
// ============================================================================

/// Declaration of a single document field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Storage primitive
    pub kind: FieldKind,
    /// Domain-side shape the stored value decodes back into
    pub shape: ValueShape,
    /// Token expansion for text fields; `None` stores the cleaned value
    pub strategy: Option<TokenStrategy>,
    /// Minimum emitted token length
    pub min_size: usize,
    /// Maximum emitted token length
    pub max_size: Option<usize>,
    /// Stopwords for the first-letter strategy
    pub stopwords: Vec<String>,
}

impl FieldSpec {
    fn of_kind(kind: FieldKind) -> Self {
        FieldSpec {
            kind,
            shape: ValueShape::Scalar,
            strategy: None,
            min_size: 1,
            max_size: None,
            stopwords: Vec::new(),
        }
    }

    /// A plain text field
    pub fn text() -> Self {
        FieldSpec::of_kind(FieldKind::Text)
    }

    /// An atomic (whole-match) string field
    pub fn atom() -> Self {
        FieldSpec::of_kind(FieldKind::Atom)
    }

    /// An integer field
    pub fn int() -> Self {
        FieldSpec::of_kind(FieldKind::Int)
    }

    /// A float field
    pub fn float() -> Self {
        FieldSpec::of_kind(FieldKind::Float)
    }

    /// A boolean field
    pub fn boolean() -> Self {
        FieldSpec::of_kind(FieldKind::Bool)
    }

    /// A naive date field
    pub fn date() -> Self {
        FieldSpec::of_kind(FieldKind::Date)
    }

    /// A list of strings, stored `|`-joined as text
    pub fn list() -> Self {
        let mut spec = FieldSpec::of_kind(FieldKind::Text);
        spec.shape = ValueShape::List;
        spec
    }

    /// A JSON payload, stored serialized as text
    pub fn json() -> Self {
        let mut spec = FieldSpec::of_kind(FieldKind::Text);
        spec.shape = ValueShape::Json;
        spec
    }

    /// Builder: apply a token strategy at index time
    pub fn with_strategy(mut self, strategy: TokenStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Builder: set token length bounds
    pub fn with_bounds(mut self, min_size: usize, max_size: Option<usize>) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    /// Builder: set stopwords for the first-letter strategy
    pub fn with_stopwords(mut self, stopwords: &[&str]) -> Self {
        self.stopwords = stopwords.iter().map(|s| s.to_string()).collect();
        self
    }
}

// ============================================================================
// DocumentSchema
// ============================================================================

/// The full field table for one document shape
///
/// Compared structurally when bindings are registered: binding two
/// different schemas to the same model/index pairing is a configuration
/// error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentSchema {
    fields: BTreeMap<String, FieldSpec>,
    rank_field: Option<String>,
}

impl DocumentSchema {
    /// An empty schema
    pub fn new() -> Self {
        DocumentSchema::default()
    }

    /// Builder: declare a field
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.insert(name.into(), spec);
        self
    }

    /// Builder: name the object field whose integer value ranks the
    /// document; documents without one keep the service-assigned rank
    pub fn rank_by(mut self, name: impl Into<String>) -> Self {
        self.rank_field = Some(name.into());
        self
    }

    /// The declared rank field, if any
    pub fn rank_field(&self) -> Option<&str> {
        self.rank_field.as_deref()
    }

    /// Iterate declared fields
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Look up one field
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are declared
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
