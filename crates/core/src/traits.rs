//! Boundary traits for external collaborators
//!
//! The core builds queries and documents; it never implements ranking,
//! storage, or fetching. Those live behind these narrow traits:
//! - IndexService: execute/put/delete against the external search index
//! - DomainStore: batched fetch of domain objects by identifier
//! - Identified / Indexable: what the core needs from a domain object
//!
//! Both I/O calls are blocking from the core's perspective and are made in
//! a fixed order per query: index execute first, store fetch second (the
//! fetch is keyed by search-returned identifiers).

use crate::error::Result;
use crate::search_types::{Document, QueryRequest, SearchResults};
use crate::types::{DocId, FieldValue};

// ============================================================================
// IndexService
// ============================================================================

/// The external full-text search index
pub trait IndexService {
    /// Execute a built query and return ranked identifiers
    ///
    /// Implementations should return [`Error::IndexQuery`](crate::Error::IndexQuery)
    /// when the query is malformed; caller-facing layers degrade that to an
    /// empty result set.
    fn execute(&self, request: &QueryRequest) -> Result<SearchResults>;

    /// Put a document into the named index
    fn put(&self, index: &str, document: &Document) -> Result<()>;

    /// Delete a document from the named index by identifier
    fn delete(&self, index: &str, id: &DocId) -> Result<()>;
}

// ============================================================================
// Domain objects
// ============================================================================

/// A domain object with a stable identifier
pub trait Identified {
    /// The string form of the object's primary key
    fn identifier(&self) -> DocId;
}

/// A domain object whose fields can be read for indexing
///
/// Field access is by statically declared name; the document schema decides
/// which fields are read and how their values are encoded.
pub trait Indexable: Identified {
    /// The primitive value for a named field, or `None` if the object has
    /// no such field
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

// ============================================================================
// DomainStore
// ============================================================================

/// The external object store
pub trait DomainStore {
    /// The domain object type this store yields
    type Object: Identified;

    /// Fetch all objects with the given identifiers in one batched call
    ///
    /// Returned order is unspecified; the result adapter re-orders into
    /// index rank order. Identifiers with no corresponding object are
    /// simply absent from the result, not errors.
    fn fetch_by_ids(&self, ids: &[DocId], prefetch: &[String]) -> Result<Vec<Self::Object>>;
}
