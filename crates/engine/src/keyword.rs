//! Free-text "search parameter" shim
//!
//! Endpoints accept an arbitrary search string from callers. This module
//! cleans it into something the index's query parser will accept and
//! turns it into a filter on the corpus field:
//! - input wrapped entirely in quotes means the caller wants that exact
//!   string, so the shim filters for equality and strips the quotes
//! - punctuation outside the allowlist breaks the index's parser whether
//!   or not it is escaped, so it is removed
//! - a dangling trailing `AND`/`OR` reads as an incomplete multi-value
//!   expression and fails parsing, so it is stripped too
//!
//! Arbitrary free text can still legitimately produce an unparseable
//! query; [`execute_lenient`] degrades that to an empty result set
//! instead of surfacing a hard failure to end users.

use bridgewalk_core::{Error, IndexService, Result, SearchResults};
use bridgewalk_index::clean;
use bridgewalk_query::{FilterNode, FilterOp, SearchQuery};

/// Field the searchable corpus of a document is stored in
pub const DEFAULT_CORPUS_FIELD: &str = "corpus";

const QUOTES: &[char] = &['\'', '"'];
const OPERATOR_TOKENS: &[&str] = &["AND", "OR"];

/// Whether the string is wrapped in a matching pair of quotes
pub fn is_quoted(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), text.chars().last()) {
        (Some(first), Some(last)) => {
            QUOTES.contains(&first) && first == last && text.chars().count() > 1
        }
        _ => false,
    }
}

/// Strip a matching pair of surrounding quotes, if present
pub fn strip_surrounding_quotes(text: &str) -> &str {
    if is_quoted(text) {
        text.trim_matches(|c| QUOTES.contains(&c))
    } else {
        text
    }
}

/// Strip a dangling trailing boolean operator token
pub fn strip_trailing_operators(text: &str) -> &str {
    let trimmed = text.trim_end();
    match trimmed.rsplit_once(char::is_whitespace) {
        Some((head, last)) if OPERATOR_TOKENS.contains(&last) => head.trim_end(),
        None if OPERATOR_TOKENS.contains(&trimmed) => "",
        _ => text,
    }
}

/// Clean a raw search string into an index-safe term
///
/// Returns the cleaned term and whether the caller asked for an exact
/// match by quoting the whole input.
pub fn clean_keywords(raw: &str) -> (String, bool) {
    let exact = is_quoted(raw);
    let unquoted = strip_surrounding_quotes(raw);
    let stripped = clean::clean(unquoted);
    (strip_trailing_operators(&stripped).to_string(), exact)
}

/// Narrow a query with a cleaned free-text search term
///
/// Quoted input filters the corpus field for equality; anything else
/// filters for containment. Input that cleans down to nothing leaves the
/// query unchanged.
pub fn keyword_filter(query: &SearchQuery, raw: &str, corpus_field: &str) -> Result<SearchQuery> {
    let (term, exact) = clean_keywords(raw);
    if term.is_empty() {
        return Ok(query.clone());
    }
    let op = if exact {
        FilterOp::Eq
    } else {
        FilterOp::Contains
    };
    query.filter(&FilterNode::leaf(corpus_field, op, term.as_str()))
}

/// Execute, treating an index-side parse failure as "no results"
///
/// Other errors still propagate; only [`Error::IndexQuery`] is degraded.
pub fn execute_lenient<I: IndexService>(query: &SearchQuery, service: &I) -> Result<SearchResults> {
    match query.execute(service) {
        Err(Error::IndexQuery(reason)) => {
            tracing::warn!(%reason, "index rejected query; returning no results");
            Ok(SearchResults::empty())
        }
        other => other,
    }
}
