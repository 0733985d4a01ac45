//! # Error Types
//!
//! Domain-specific error types for lodge-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lodge-core errors (this file)                                         │
//! │  ├── CoreError        - Reservation rule violations                    │
//! │  └── ValidationError  - Operator input failures                        │
//! │                                                                         │
//! │  lodge-registry errors (separate crate)                                │
//! │  └── RegistryError    - Lookup failures                                │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── CliError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → RegistryError → CliError          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (capacity, counts, field names)
//! 3. Errors are enum variants, never String
//! 4. The core raises, the console catches and translates

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Suite Capacity (as reported in errors)
// =============================================================================

/// The capacity a reservation was checked against.
///
/// A reservation without a suite has no capacity at all, which is reported
/// as `none` instead of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuiteCapacity {
    /// No suite was attached when guests were assigned.
    Unassigned,
    /// The attached suite hosts at most this many guests.
    Limit(u32),
}

impl fmt::Display for SuiteCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuiteCapacity::Unassigned => write!(f, "none (no suite assigned)"),
            SuiteCapacity::Limit(capacity) => write!(f, "{}", capacity),
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent reservation rule violations. They should be caught
/// at the console and translated to operator-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Guest list does not fit the suite, or no suite is attached yet.
    ///
    /// ## When This Occurs
    /// ```text
    /// assign_guests([Ana, Rui]) on a suite with capacity 1
    ///      │
    ///      ▼
    /// CapacityExceeded { capacity: Limit(1), received: 2 }
    ///      │
    ///      ▼
    /// Console: "Could not create reservation: Suite capacity is 1, but 2 guests were received"
    /// ```
    #[error("Suite capacity is {capacity}, but {received} guests were received")]
    CapacityExceeded {
        capacity: SuiteCapacity,
        received: usize,
    },

    /// An operation needs state the reservation does not have yet.
    ///
    /// ## When This Occurs
    /// - Pricing a reservation before a suite is attached
    #[error("Cannot compute {operation}: {reason}")]
    PreconditionNotMet {
        operation: &'static str,
        reason: &'static str,
    },

    /// Operation called out of order for the reservation's lifecycle.
    ///
    /// ## When This Occurs
    /// - Re-assigning guests to a configured reservation
    /// - Changing the suite after guests were assigned
    #[error("Reservation is {current}, cannot {operation}")]
    InvalidReservationState {
        current: &'static str,
        operation: &'static str,
    },

    /// A price calculation does not fit in the money type.
    #[error("Amount overflow while computing {0}")]
    AmountOverflow(&'static str),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator input doesn't meet requirements.
/// Used at the console boundary before any registry is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., not a number, too many decimals).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A 1-based list position that points at nothing.
    #[error("{field} selection {position} is not between 1 and {len}")]
    InvalidSelection {
        field: String,
        position: usize,
        len: usize,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_exceeded_message() {
        let err = CoreError::CapacityExceeded {
            capacity: SuiteCapacity::Limit(1),
            received: 2,
        };
        assert_eq!(
            err.to_string(),
            "Suite capacity is 1, but 2 guests were received"
        );
    }

    #[test]
    fn test_capacity_exceeded_without_suite_message() {
        let err = CoreError::CapacityExceeded {
            capacity: SuiteCapacity::Unassigned,
            received: 3,
        };
        assert_eq!(
            err.to_string(),
            "Suite capacity is none (no suite assigned), but 3 guests were received"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "first name".to_string(),
        };
        assert_eq!(err.to_string(), "first name is required");

        let err = ValidationError::InvalidSelection {
            field: "suite".to_string(),
            position: 4,
            len: 3,
        };
        assert_eq!(err.to_string(), "suite selection 4 is not between 1 and 3");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "days".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
