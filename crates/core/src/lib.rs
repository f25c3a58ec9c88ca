//! Core types and traits for bridgewalk
//!
//! This crate defines the foundational types used throughout the system:
//! - DocId: string form of a domain object's primary key
//! - Connector / Operator / FieldValue: query-language vocabulary
//! - QueryNode: the boolean query tree owned by the core
//! - QueryRequest / SearchResults / Document: the index boundary types
//! - Error: error type hierarchy
//! - Traits: boundary contracts (IndexService, DomainStore, Indexable)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod search_types;
pub mod traits;
pub mod tree;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use search_types::{Document, QueryRequest, SearchHit, SearchResults};
pub use traits::{DomainStore, Identified, Indexable, IndexService};
pub use tree::QueryNode;
pub use types::{Connector, DocId, FieldValue, Operator, OrderSpec, SortDir};
