//! bridgewalk — a query-translation and indexing shim
//!
//! Application code written against a relational-model query API falls
//! back to a full-text search index when a search parameter is present,
//! and index results are mapped back into domain objects in rank order.
//!
//! The pieces, leaves first:
//! - [`bridgewalk_index`]: n-gram indexers (prefix, substring,
//!   first-letter) building searchable tokens from text
//! - [`bridgewalk_core`]: the query tree, boundary types and traits
//! - [`bridgewalk_query`]: filter translation and the fluent query value
//! - [`bridgewalk_engine`]: schemas, bindings, auto-index hooks and the
//!   result adapter
//!
//! # Example
//!
//! ```
//! use bridgewalk::{FilterNode, SearchQuery};
//!
//! let query = SearchQuery::new("users")
//!     .filter(&FilterNode::is_in("email", ["a@example.com", "b@example.com"]))
//!     .unwrap()
//!     .order_by(&["-created"]);
//! assert_eq!(query.tree().unwrap().leaf_count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use bridgewalk_core::{
    Connector, DocId, Document, DomainStore, Error, FieldValue, Identified, Indexable,
    IndexService, Operator, OrderSpec, QueryNode, QueryRequest, Result, SearchHit, SearchResults,
    SortDir,
};
pub use bridgewalk_engine::{
    build_document, clean_keywords, decode_document, execute_lenient, keyword_filter, materialize,
    DocumentSchema, FieldKind, FieldSpec, IndexHook, Materialized, QueryAdapter, Registry,
    RegistryBuilder, TokenStrategy, ValueShape, DEFAULT_CORPUS_FIELD,
};
pub use bridgewalk_index::{clean, contains, firstletter, fold, startswith, words};
pub use bridgewalk_query::{translate, FilterNode, FilterOp, FilterValue, SearchQuery};
