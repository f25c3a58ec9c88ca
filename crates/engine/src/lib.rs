//! Indexing and result-mapping engine for bridgewalk
//!
//! This crate provides:
//! - DocumentSchema / FieldSpec: statically declared field mappings
//! - `build_document` / `decode_document`: schema-driven encoding of
//!   domain objects and the inverse decoding of stored documents
//! - Registry: read-only model-to-document bindings, validated at setup
//! - IndexHook: explicit post-commit auto-indexing callback
//! - QueryAdapter / `materialize`: ranked results back into domain objects
//! - keyword: the free-text "search parameter" shim

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapter;
pub mod document;
pub mod hook;
pub mod keyword;
pub mod registry;
pub mod schema;

// Re-export commonly used types
pub use adapter::{materialize, Materialized, QueryAdapter};
pub use document::{build_document, decode_document};
pub use hook::IndexHook;
pub use keyword::{clean_keywords, execute_lenient, keyword_filter, DEFAULT_CORPUS_FIELD};
pub use registry::{Registry, RegistryBuilder};
pub use schema::{DocumentSchema, FieldKind, FieldSpec, TokenStrategy, ValueShape};
