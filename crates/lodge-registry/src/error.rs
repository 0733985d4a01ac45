//! # Registry Error Types
//!
//! Error types for registry operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (capacity, lifecycle, validation)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RegistryError (this module) ← Adds lookup failures                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError (in console app) ← Printed for the operator                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use lodge_core::{CoreError, ValidationError};
use thiserror::Error;

/// Registry operation errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No record with this id.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A domain rule rejected the operation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl RegistryError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        RegistryError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

impl From<ValidationError> for RegistryError {
    fn from(err: ValidationError) -> Self {
        RegistryError::Core(CoreError::Validation(err))
    }
}

/// Convenience type alias for registry results.
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = RegistryError::not_found("Suite", "abc");
        assert_eq!(err.to_string(), "Suite not found: abc");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: RegistryError = CoreError::AmountOverflow("stay subtotal").into();
        assert_eq!(err.to_string(), "Amount overflow while computing stay subtotal");
    }

    #[test]
    fn test_validation_error_wraps_through_core() {
        let err: RegistryError = ValidationError::MustBePositive {
            field: "days".to_string(),
        }
        .into();
        assert!(matches!(err, RegistryError::Core(CoreError::Validation(_))));
    }
}
