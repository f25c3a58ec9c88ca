//! Model-to-document bindings
//!
//! The registry maps (model kind, index name) pairings to document
//! schemas. It is built once at process start by [`RegistryBuilder`],
//! rejecting conflicting bindings eagerly, and is read-only thereafter —
//! there is no global; callers pass the registry to whatever performs
//! auto-indexing.
//!
//! The same model may be bound to several indexes; re-binding the same
//! schema to the same pairing is a harmless no-op.

use crate::schema::DocumentSchema;
use bridgewalk_core::{Error, Result};
use std::collections::BTreeMap;

// ============================================================================
// RegistryBuilder
// ============================================================================

/// Builder for [`Registry`], validating bindings as they are added
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    bindings: BTreeMap<(String, String), DocumentSchema>,
}

impl RegistryBuilder {
    /// An empty builder
    pub fn new() -> Self {
        RegistryBuilder::default()
    }

    /// Bind a model kind to an index with the given document schema
    ///
    /// Fails with [`Error::RegistrationConflict`] if the pairing is
    /// already bound to a structurally different schema. Conflicts are
    /// configuration errors and surface here, at setup time, never at
    /// query time.
    pub fn bind(
        mut self,
        model: impl Into<String>,
        index: impl Into<String>,
        schema: DocumentSchema,
    ) -> Result<Self> {
        let model = model.into();
        let index = index.into();
        match self.bindings.get(&(model.clone(), index.clone())) {
            Some(existing) if existing != &schema => {
                Err(Error::RegistrationConflict { model, index })
            }
            _ => {
                self.bindings.insert((model, index), schema);
                Ok(self)
            }
        }
    }

    /// Finish building; the registry is immutable from here on
    pub fn build(self) -> Registry {
        Registry {
            bindings: self.bindings,
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Read-only model-to-document binding table
#[derive(Debug, Clone)]
pub struct Registry {
    bindings: BTreeMap<(String, String), DocumentSchema>,
}

impl Registry {
    /// All (index name, schema) bindings for a model kind
    pub fn bindings_for<'a>(
        &'a self,
        model: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a DocumentSchema)> {
        self.bindings
            .iter()
            .filter(move |((m, _), _)| m == model)
            .map(|((_, index), schema)| (index.as_str(), schema))
    }

    /// The schema bound to one model/index pairing
    pub fn get(&self, model: &str, index: &str) -> Option<&DocumentSchema> {
        self.bindings.get(&(model.to_string(), index.to_string()))
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no bindings exist
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSpec;

    fn user_schema() -> DocumentSchema {
        DocumentSchema::new().field("name", FieldSpec::text())
    }

    #[test]
    fn test_bind_and_lookup() {
        let registry = RegistryBuilder::new()
            .bind("user", "users", user_schema())
            .unwrap()
            .build();
        assert_eq!(registry.get("user", "users"), Some(&user_schema()));
        assert_eq!(registry.get("user", "other"), None);
    }

    #[test]
    fn test_same_model_multiple_indexes() {
        let registry = RegistryBuilder::new()
            .bind("user", "users", user_schema())
            .unwrap()
            .bind("user", "users_by_letter", user_schema())
            .unwrap()
            .build();
        let indexes: Vec<&str> = registry.bindings_for("user").map(|(i, _)| i).collect();
        assert_eq!(indexes, vec!["users", "users_by_letter"]);
    }

    #[test]
    fn test_rebinding_identical_schema_is_noop() {
        let registry = RegistryBuilder::new()
            .bind("user", "users", user_schema())
            .unwrap()
            .bind("user", "users", user_schema())
            .unwrap()
            .build();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_conflicting_schema_fails_eagerly() {
        let other = DocumentSchema::new().field("name", FieldSpec::atom());
        let result = RegistryBuilder::new()
            .bind("user", "users", user_schema())
            .unwrap()
            .bind("user", "users", other);
        assert!(matches!(
            result,
            Err(Error::RegistrationConflict { .. })
        ));
    }
}
