//! The fluent query value
//!
//! A [`SearchQuery`] accumulates a predicate tree plus index name,
//! ordering and pagination. Every narrowing operation clones: previously
//! returned query values stay valid snapshots, so a base query can safely
//! be reused across several narrowings.
//!
//! Lifecycle of a query value:
//!
//! ```text
//! Empty -> Filtered* -> Ordered? -> Sliced? -> Executed
//! ```
//!
//! `none()` puts the value in a terminal absorbing state: further filter,
//! order or slice calls keep it "none", it iterates empty and counts zero
//! without touching the index.

use crate::filter::{translate, FilterNode};
use bridgewalk_core::{
    Connector, IndexService, OrderSpec, QueryNode, QueryRequest, Result, SearchResults,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// SearchQuery
// ============================================================================

/// An accumulated search-index query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    index: String,
    tree: Option<QueryNode>,
    order: Vec<OrderSpec>,
    offset: usize,
    limit: Option<usize>,
    ids_only: bool,
    is_none: bool,
}

impl SearchQuery {
    /// A query over the named index with no constraints yet
    pub fn new(index: impl Into<String>) -> Self {
        SearchQuery {
            index: index.into(),
            tree: None,
            order: Vec::new(),
            offset: 0,
            limit: None,
            ids_only: false,
            is_none: false,
        }
    }

    /// The accumulated predicate tree
    pub fn tree(&self) -> Option<&QueryNode> {
        self.tree.as_ref()
    }

    /// The index this query targets
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Whether this value is in the terminal "none" state
    pub fn is_none(&self) -> bool {
        self.is_none
    }

    // ========================================================================
    // Narrowing
    // ========================================================================

    /// Narrow with a relational filter, joined by AND
    pub fn filter(&self, filter: &FilterNode) -> Result<SearchQuery> {
        self.filter_with(filter, Connector::And)
    }

    /// Narrow with a relational filter, joined by OR
    pub fn filter_or(&self, filter: &FilterNode) -> Result<SearchQuery> {
        self.filter_with(filter, Connector::Or)
    }

    /// Narrow with a relational filter under the given connector
    ///
    /// The connector governs the merge: repeated disjunctive narrowing is
    /// never corrupted into a conjunction.
    pub fn filter_with(&self, filter: &FilterNode, connector: Connector) -> Result<SearchQuery> {
        match translate(filter)? {
            Some(tree) => Ok(self.merge(tree, connector)),
            // The filter placed no constraint; the query is unchanged.
            None => Ok(self.clone()),
        }
    }

    /// Merge an already-translated tree under the given connector
    pub fn merge(&self, tree: QueryNode, connector: Connector) -> SearchQuery {
        let mut clone = self.clone();
        if !clone.is_none {
            clone.tree = Some(QueryNode::merge(clone.tree.take(), tree, connector));
        }
        clone
    }

    /// Replace the ordering; a leading `-` means descending
    pub fn order_by(&self, terms: &[&str]) -> SearchQuery {
        let mut clone = self.clone();
        clone.order = terms.iter().map(|t| OrderSpec::parse(t)).collect();
        clone
    }

    /// Set pagination
    pub fn slice(&self, offset: usize, limit: Option<usize>) -> SearchQuery {
        let mut clone = self.clone();
        clone.offset = offset;
        clone.limit = limit;
        clone
    }

    /// Ask the index for identifiers only, not stored fields
    pub fn ids_only(&self) -> SearchQuery {
        let mut clone = self.clone();
        clone.ids_only = true;
        clone
    }

    /// A query that matches nothing, ever
    ///
    /// The none state absorbs all further narrowing.
    pub fn none(&self) -> SearchQuery {
        let mut clone = self.clone();
        clone.is_none = true;
        clone
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// The request handed to the external index
    pub fn to_request(&self) -> QueryRequest {
        QueryRequest {
            index: self.index.clone(),
            query: self.tree.clone(),
            order: self.order.clone(),
            offset: self.offset,
            limit: self.limit,
            ids_only: self.ids_only,
        }
    }

    /// Execute against the external index
    ///
    /// A none-state query returns empty results without touching the
    /// service.
    pub fn execute<I: IndexService>(&self, service: &I) -> Result<SearchResults> {
        if self.is_none {
            return Ok(SearchResults::empty());
        }
        service.execute(&self.to_request())
    }
}
