//! # Domain Types
//!
//! Core domain types used throughout Lodge.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Guest       │   │     Suite       │   │  DiscountRate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  bps (u32)      │       │
//! │  │  first_name     │   │  label          │   │  1000 = 10%     │       │
//! │  │  last_name?     │   │  capacity       │   └─────────────────┘       │
//! │  │  registered_at  │   │  nightly_rate   │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: UUID v4 - immutable, used for lookups and JSON output
//! - Business key: the 1-based position the operator picks from a listing
//!
//! Guests and suites are immutable after construction. Input rules live in
//! [`crate::validation`] and are applied by the caller before construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SuiteCapacity;
use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1000 bps = 10%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// No discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Guest
// =============================================================================

/// A person who can be attached to reservations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Required first name.
    pub first_name: String,

    /// Optional last name; blank input is stored as `None`.
    pub last_name: Option<String>,

    /// When the guest was registered.
    pub registered_at: DateTime<Utc>,
}

impl Guest {
    /// Creates a guest. The caller rejects empty first names beforehand.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let last_name = last_name.into();
        Guest {
            id: Uuid::new_v4().to_string(),
            first_name: first_name.into(),
            last_name: if last_name.trim().is_empty() {
                None
            } else {
                Some(last_name)
            },
            registered_at: Utc::now(),
        }
    }

    /// First and last name joined by a space, trimmed.
    ///
    /// ## Example
    /// ```rust
    /// use lodge_core::Guest;
    ///
    /// assert_eq!(Guest::new("Ana", "Silva").full_name(), "Ana Silva");
    /// assert_eq!(Guest::new("Ana", "").full_name(), "Ana");
    /// ```
    pub fn full_name(&self) -> String {
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{} {}", self.first_name, last).trim().to_string()
    }
}

// =============================================================================
// Suite
// =============================================================================

/// A bookable room type with a capacity and a nightly rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suite {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Free-text category ("Standard", "Luxo", "Premium").
    pub label: String,

    /// Maximum number of guests hosted at once.
    pub capacity: u32,

    /// Price of one night.
    pub nightly_rate: Money,

    /// When the suite was registered.
    pub registered_at: DateTime<Utc>,
}

impl Suite {
    /// Creates a suite. Capacity and rate are validated by the caller.
    pub fn new(label: impl Into<String>, capacity: u32, nightly_rate: Money) -> Self {
        Suite {
            id: Uuid::new_v4().to_string(),
            label: label.into(),
            capacity,
            nightly_rate,
            registered_at: Utc::now(),
        }
    }

    /// Checks whether a party of `guests` fits in this suite.
    #[inline]
    pub fn can_host(&self, guests: usize) -> bool {
        guests <= self.capacity as usize
    }

    /// The capacity as reported in capacity errors.
    #[inline]
    pub fn capacity_limit(&self) -> SuiteCapacity {
        SuiteCapacity::Limit(self.capacity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_joins_first_and_last() {
        assert_eq!(Guest::new("Ana", "Silva").full_name(), "Ana Silva");
    }

    #[test]
    fn test_full_name_without_last_name_has_no_trailing_space() {
        let guest = Guest::new("Ana", "");
        assert_eq!(guest.last_name, None);
        assert_eq!(guest.full_name(), "Ana");

        let guest = Guest::new("Ana", "   ");
        assert_eq!(guest.last_name, None);
        assert_eq!(guest.full_name(), "Ana");
    }

    #[test]
    fn test_guests_get_distinct_ids() {
        let a = Guest::new("Ana", "Silva");
        let b = Guest::new("Ana", "Silva");
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_suite_can_host() {
        let suite = Suite::new("Standard", 2, Money::from_cents(10_000));
        assert!(suite.can_host(0));
        assert!(suite.can_host(2));
        assert!(!suite.can_host(3));
        assert_eq!(suite.capacity_limit(), SuiteCapacity::Limit(2));
    }

    #[test]
    fn test_discount_rate() {
        let rate = DiscountRate::from_bps(1000);
        assert_eq!(rate.bps(), 1000);
        assert!(DiscountRate::default().is_zero());
    }

    #[test]
    fn test_suite_serializes_camel_case() {
        let suite = Suite::new("Luxo", 1, Money::from_cents(50_000));
        let json = serde_json::to_value(&suite).unwrap();
        assert_eq!(json["label"], "Luxo");
        assert_eq!(json["nightlyRate"], 50_000);
        assert_eq!(json["capacity"], 1);
    }
}
