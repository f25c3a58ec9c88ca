//! Auto-indexing hooks
//!
//! An [`IndexHook`] is an explicit post-commit callback object: the store
//! invokes it after a domain object is saved or deleted, and it keeps the
//! bound indexes in step. No event bus is involved; wiring is whatever
//! the caller chooses (synchronous call, task queue, ...).
//!
//! Identifier derivation is `str(pk)` via [`Identified::identifier`] —
//! pure, deterministic and stable for the object's lifetime, so a delete
//! years after the original put still targets the same document.

use crate::document::build_document;
use crate::registry::Registry;
use bridgewalk_core::{DocId, Indexable, IndexService, Result};

/// Post-commit callback keeping search indexes in step with the store
pub struct IndexHook<'a, I: IndexService> {
    registry: &'a Registry,
    service: &'a I,
}

impl<'a, I: IndexService> IndexHook<'a, I> {
    /// Create a hook over a binding registry and an index service
    pub fn new(registry: &'a Registry, service: &'a I) -> Self {
        IndexHook { registry, service }
    }

    /// Index a just-saved object into every index its model is bound to
    pub fn object_saved<T: Indexable>(&self, model: &str, obj: &T) -> Result<()> {
        for (index, schema) in self.registry.bindings_for(model) {
            let doc = build_document(obj, schema)?;
            self.service.put(index, &doc)?;
        }
        Ok(())
    }

    /// Remove a just-deleted object from every index its model is bound to
    pub fn object_deleted(&self, model: &str, id: &DocId) -> Result<()> {
        for (index, _) in self.registry.bindings_for(model) {
            self.service.delete(index, id)?;
        }
        Ok(())
    }
}
