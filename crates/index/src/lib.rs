//! Tokenization and text normalization for bridgewalk
//!
//! This crate provides:
//! - N-gram indexers (prefix, substring, first-letter) used to build
//!   searchable tokens from text fields
//! - The shared text cleaning they rely on (punctuation stripping,
//!   whitespace collapsing, diacritic folding)
//!
//! Everything here is a pure function: no I/O, no state, testable in
//! isolation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clean;
pub mod indexers;

// Re-export commonly used functions
pub use clean::{clean, fold, words, ALLOWED_PUNCTUATION};
pub use indexers::{contains, firstletter, startswith};
