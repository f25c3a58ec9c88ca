//! Error types for the bridgewalk query shim
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for bridgewalk operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the bridgewalk query shim
#[derive(Debug, Error)]
pub enum Error {
    /// A filter tree carries negation, which the translator cannot
    /// faithfully represent. Silently dropping the negation would broaden
    /// the result set, so translation fails instead.
    #[error("Negated filter nodes are not supported by the search translation")]
    UnsupportedNegation,

    /// A filter tree is structurally invalid (e.g. a multi-value payload
    /// on a non-IN operator)
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// The external index rejected a built query (typically a parse
    /// failure of a degenerate expression)
    #[error("Index query error: {0}")]
    IndexQuery(String),

    /// The domain store failed to fetch objects
    #[error("Store error: {0}")]
    Store(String),

    /// A field value could not be encoded into a document field
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Two different document schemas were bound to the same
    /// model/index pairing. Fatal at configuration time.
    #[error("Registration conflict: model {model:?} already bound to index {index:?} with a different schema")]
    RegistrationConflict {
        /// The model kind being bound
        model: String,
        /// The index name the binding targets
        index: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unsupported_negation() {
        let err = Error::UnsupportedNegation;
        assert!(err.to_string().contains("Negated"));
    }

    #[test]
    fn test_error_display_invalid_filter() {
        let err = Error::InvalidFilter("IN payload on = operator".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Invalid filter"));
        assert!(msg.contains("IN payload"));
    }

    #[test]
    fn test_error_display_index_query() {
        let err = Error::IndexQuery("unbalanced parentheses".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Index query error"));
        assert!(msg.contains("unbalanced parentheses"));
    }

    #[test]
    fn test_error_display_registration_conflict() {
        let err = Error::RegistrationConflict {
            model: "user".to_string(),
            index: "users".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Registration conflict"));
        assert!(msg.contains("user"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        fn returns_error() -> Result<i32> {
            Err(Error::UnsupportedNegation)
        }

        assert_eq!(returns_result().unwrap(), 42);
        assert!(returns_error().is_err());
    }
}
