//! # Validation Module
//!
//! Input validation rules for Lodge.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompt (lodge-cli)                                   │
//! │  ├── Parse raw text (numbers, amounts, selections)                     │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Reservation state machine (reservation.rs)                   │
//! │  └── Capacity and ordering rules                                       │
//! │                                                                         │
//! │  Invalid input never reaches the registries: the console re-prompts   │
//! │  or abandons the operation.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lodge_core::validation::{validate_capacity, validate_first_name};
//!
//! assert!(validate_first_name("Ana").is_ok());
//! assert_eq!(validate_capacity(2).unwrap(), 2u32);
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_required_text(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    validate_optional_text(field, value)
}

fn validate_optional_text(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a guest's first name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 100 characters
///
/// ## Example
/// ```rust
/// use lodge_core::validation::validate_first_name;
///
/// assert!(validate_first_name("Ana").is_ok());
/// assert!(validate_first_name("   ").is_err());
/// ```
pub fn validate_first_name(name: &str) -> ValidationResult<()> {
    validate_required_text("first name", name)
}

/// Validates a guest's last name, which may be empty.
pub fn validate_last_name(name: &str) -> ValidationResult<()> {
    validate_optional_text("last name", name)
}

/// Validates a suite type label.
pub fn validate_suite_label(label: &str) -> ValidationResult<()> {
    validate_required_text("suite type", label)
}

// =============================================================================
// Numeric Validators
// =============================================================================

fn validate_positive_u32(field: &str, value: i64) -> ValidationResult<u32> {
    if value <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field: field.to_string(),
        min: 1,
        max: i64::from(u32::MAX),
    })
}

/// Validates a suite capacity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must fit in `u32`
pub fn validate_capacity(capacity: i64) -> ValidationResult<u32> {
    validate_positive_u32("capacity", capacity)
}

/// Validates the number of days of a stay.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must fit in `u32`
///
/// ## Example
/// ```rust
/// use lodge_core::validation::validate_days;
///
/// assert_eq!(validate_days(12).unwrap(), 12);
/// assert!(validate_days(0).is_err());
/// ```
pub fn validate_days(days: i64) -> ValidationResult<u32> {
    validate_positive_u32("days", days)
}

/// Validates a nightly rate.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (complimentary suites)
pub fn validate_nightly_rate(rate: Money) -> ValidationResult<()> {
    if rate.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "nightly rate".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Selection Validators
// =============================================================================

/// Validates a 1-based position picked from a listing of `len` entries.
///
/// ## Returns
/// The 0-based index into the listing.
///
/// ## Example
/// ```rust
/// use lodge_core::validation::validate_selection;
///
/// assert_eq!(validate_selection("suite", 1, 3).unwrap(), 0);
/// assert!(validate_selection("suite", 0, 3).is_err());
/// assert!(validate_selection("suite", 4, 3).is_err());
/// ```
pub fn validate_selection(field: &str, position: usize, len: usize) -> ValidationResult<usize> {
    if position == 0 || position > len {
        return Err(ValidationError::InvalidSelection {
            field: field.to_string(),
            position,
            len,
        });
    }

    Ok(position - 1)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_first_name() {
        assert!(validate_first_name("Ana").is_ok());
        assert!(validate_first_name(" Ana ").is_ok());

        assert_eq!(
            validate_first_name(""),
            Err(ValidationError::Required {
                field: "first name".to_string()
            })
        );
        assert!(validate_first_name("   ").is_err());
        assert!(validate_first_name(&"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_last_name() {
        assert!(validate_last_name("").is_ok());
        assert!(validate_last_name("Silva").is_ok());
        assert!(validate_last_name(&"S".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_suite_label() {
        assert!(validate_suite_label("Standard").is_ok());
        assert!(validate_suite_label("").is_err());
    }

    #[test]
    fn test_validate_capacity() {
        assert_eq!(validate_capacity(1).unwrap(), 1);
        assert_eq!(validate_capacity(4).unwrap(), 4);

        assert!(matches!(
            validate_capacity(0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_capacity(-2).is_err());
        assert!(matches!(
            validate_capacity(i64::from(u32::MAX) + 1),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_days() {
        assert_eq!(validate_days(1).unwrap(), 1);
        assert!(validate_days(0).is_err());
        assert!(validate_days(-5).is_err());
    }

    #[test]
    fn test_validate_nightly_rate() {
        assert!(validate_nightly_rate(Money::zero()).is_ok());
        assert!(validate_nightly_rate(Money::from_cents(10_000)).is_ok());
        assert!(validate_nightly_rate(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_selection() {
        assert_eq!(validate_selection("guest", 1, 1).unwrap(), 0);
        assert_eq!(validate_selection("guest", 3, 3).unwrap(), 2);
        assert!(validate_selection("guest", 0, 3).is_err());
        assert!(validate_selection("guest", 1, 0).is_err());
    }
}
