//! Query construction for bridgewalk
//!
//! This crate provides:
//! - FilterNode: the relational-side filter tree
//! - `translate`: filter tree to search query tree conversion
//! - SearchQuery: the fluent, clone-on-write query value
//!
//! Trees are transient and immutable: built per invocation, merged by
//! cloning, never mutated in place.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod query;

// Re-export commonly used types
pub use filter::{translate, FilterNode, FilterOp, FilterValue};
pub use query::SearchQuery;
