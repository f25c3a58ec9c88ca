//! Mapping ranked index results back into domain objects
//!
//! The adapter executes a query, takes the ranked identifiers, fetches
//! the corresponding objects from the store in one batched call, and
//! yields them re-ordered to match the index's ranking. The index and
//! store may be transiently inconsistent: identifiers with no stored
//! object are skipped with a warning, never a failure.

use bridgewalk_core::{
    Connector, DocId, DomainStore, Identified, IndexService, Result, SearchResults,
};
use bridgewalk_query::{FilterNode, SearchQuery};
use std::collections::HashMap;

// ============================================================================
// Materialized
// ============================================================================

/// Domain objects in index rank order
///
/// A finite, consuming sequence: iterating drains it, and there is no
/// restart without re-querying. `total()` reports the index's total for
/// the query, not the post-skip object count.
#[derive(Debug)]
pub struct Materialized<T> {
    objects: std::vec::IntoIter<T>,
    total: usize,
}

impl<T> Materialized<T> {
    /// The index-reported total for the query
    pub fn total(&self) -> usize {
        self.total
    }
}

impl<T> Iterator for Materialized<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.objects.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.objects.size_hint()
    }
}

/// Fetch and re-order the objects behind a set of ranked results
///
/// One batched store fetch for all identifiers, then a walk of the
/// original ranked order. An identifier the store cannot produce is
/// logged and skipped; duplicate identifiers yield the object again
/// (deduplication is the index's business).
pub fn materialize<S>(
    results: &SearchResults,
    store: &S,
    prefetch: &[String],
) -> Result<Materialized<S::Object>>
where
    S: DomainStore,
    S::Object: Clone,
{
    let ids = results.ids();
    let fetched = store.fetch_by_ids(&ids, prefetch)?;

    let by_id: HashMap<DocId, S::Object> = fetched
        .into_iter()
        .map(|obj| (obj.identifier(), obj))
        .collect();

    let mut ordered = Vec::with_capacity(ids.len());
    for id in &ids {
        match by_id.get(id) {
            Some(obj) => ordered.push(obj.clone()),
            None => {
                tracing::warn!(
                    id = %id,
                    "search index returned an identifier with no stored object; skipping"
                );
            }
        }
    }

    Ok(Materialized {
        objects: ordered.into_iter(),
        total: results.total,
    })
}

// ============================================================================
// QueryAdapter
// ============================================================================

/// A search query bound to its two external collaborators
///
/// Wraps a [`SearchQuery`] so callers written against a relational
/// queryset shape get the same fluent narrowing, plus materialization
/// back into domain objects. Narrowing clones the underlying query; the
/// adapter it was called on remains a valid snapshot.
pub struct QueryAdapter<'a, I, S> {
    query: SearchQuery,
    service: &'a I,
    store: &'a S,
    prefetch: Vec<String>,
}

impl<'a, I, S> QueryAdapter<'a, I, S>
where
    I: IndexService,
    S: DomainStore,
{
    /// Bind a query to an index service and a domain store
    pub fn new(query: SearchQuery, service: &'a I, store: &'a S) -> Self {
        QueryAdapter {
            query,
            service,
            store,
            prefetch: Vec::new(),
        }
    }

    /// The underlying query value
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Builder: eager-load hints passed through to the store fetch
    pub fn prefetch(mut self, lookups: &[&str]) -> Self {
        self.prefetch = lookups.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Narrow with a relational filter, joined by AND
    pub fn filter(&self, filter: &FilterNode) -> Result<Self> {
        Ok(self.with_query(self.query.filter(filter)?))
    }

    /// Narrow with a relational filter, joined by OR
    pub fn filter_or(&self, filter: &FilterNode) -> Result<Self> {
        Ok(self.with_query(self.query.filter_or(filter)?))
    }

    /// Narrow with a relational filter under the given connector
    pub fn filter_with(&self, filter: &FilterNode, connector: Connector) -> Result<Self> {
        Ok(self.with_query(self.query.filter_with(filter, connector)?))
    }

    /// Replace the ordering
    pub fn order_by(&self, terms: &[&str]) -> Self {
        self.with_query(self.query.order_by(terms))
    }

    /// Set pagination
    pub fn slice(&self, offset: usize, limit: Option<usize>) -> Self {
        self.with_query(self.query.slice(offset, limit))
    }

    /// An adapter that matches nothing, ever
    pub fn none(&self) -> Self {
        self.with_query(self.query.none())
    }

    /// The index-reported total for this query
    ///
    /// A none-state adapter reports zero without touching the index.
    pub fn count(&self) -> Result<usize> {
        if self.query.is_none() {
            return Ok(0);
        }
        Ok(self.query.execute(self.service)?.total)
    }

    fn with_query(&self, query: SearchQuery) -> Self {
        QueryAdapter {
            query,
            service: self.service,
            store: self.store,
            prefetch: self.prefetch.clone(),
        }
    }
}

impl<'a, I, S> QueryAdapter<'a, I, S>
where
    I: IndexService,
    S: DomainStore,
    S::Object: Clone,
{
    /// Execute and materialize domain objects in rank order
    ///
    /// Index execute first, store fetch second — the fetch is keyed by
    /// the identifiers the index returned.
    pub fn fetch(&self) -> Result<Materialized<S::Object>> {
        let results = self.query.execute(self.service)?;
        materialize(&results, self.store, &self.prefetch)
    }
}
