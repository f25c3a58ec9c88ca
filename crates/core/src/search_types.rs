//! Request/result types for the index boundary
//!
//! This module defines:
//! - QueryRequest: everything the external index needs to run a query
//! - SearchHit / SearchResults: ranked identifiers coming back
//! - Document: the unit put into an index by auto-indexing hooks

use crate::tree::QueryNode;
use crate::types::{DocId, FieldValue, OrderSpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// QueryRequest
// ============================================================================

/// A fully built query, ready for the external index to execute
///
/// The core never executes queries itself; it hands this to an
/// [`IndexService`](crate::traits::IndexService) implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Name of the index to query
    pub index: String,
    /// Predicate tree; `None` matches every document
    pub query: Option<QueryNode>,
    /// Ordering terms, highest priority first
    pub order: Vec<OrderSpec>,
    /// Pagination offset
    pub offset: usize,
    /// Pagination limit; `None` means the service default
    pub limit: Option<usize>,
    /// Whether the caller only needs identifiers, not stored fields
    pub ids_only: bool,
}

// ============================================================================
// SearchResults
// ============================================================================

/// A single ranked result from the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Identifier of the matching document (the domain pk string)
    pub id: DocId,
    /// Relevance/ordering score assigned by the index
    pub rank: u64,
}

impl SearchHit {
    /// Create a hit
    pub fn new(id: impl Into<DocId>, rank: u64) -> Self {
        SearchHit {
            id: id.into(),
            rank,
        }
    }
}

/// Ranked results returned by the external index
///
/// `total` is the index's reported total for the query, which may exceed
/// the number of hits in this page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResults {
    /// Hits in rank order
    pub hits: Vec<SearchHit>,
    /// Total matches reported by the index
    pub total: usize,
}

impl SearchResults {
    /// An empty result set
    pub fn empty() -> Self {
        SearchResults::default()
    }

    /// Identifiers in rank order
    ///
    /// Duplicates are preserved; deduplication is the index's business,
    /// not the adapter's.
    pub fn ids(&self) -> Vec<DocId> {
        self.hits.iter().map(|h| h.id.clone()).collect()
    }

    /// Number of hits in this page
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether this page has no hits
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

// ============================================================================
// Document
// ============================================================================

/// A document to be put into a search index
///
/// Built from a domain object by a schema-driven encoder. The id is always
/// the string form of the object's primary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier (`str(pk)`)
    pub id: DocId,
    /// Explicit rank; when absent the index service assigns one
    pub rank: Option<u64>,
    /// Field name to encoded value
    pub fields: BTreeMap<String, FieldValue>,
}

impl Document {
    /// Create an empty document for the given identifier
    pub fn new(id: impl Into<DocId>) -> Self {
        Document {
            id: id.into(),
            rank: None,
            fields: BTreeMap::new(),
        }
    }

    /// Builder: set an explicit rank
    pub fn with_rank(mut self, rank: u64) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Set a field value
    pub fn set_field(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Get a field value
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}
