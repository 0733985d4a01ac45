//! # lodge-core: Pure Business Logic for Lodge
//!
//! This crate is the **heart** of Lodge. It contains the booking domain
//! model and its rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Lodge Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Operator Console (lodge-cli)                 │   │
//! │  │    Menu ──► Prompts ──► Command handlers ──► Text / JSON        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    lodge-registry                               │   │
//! │  │    guests, suites, reservations (in-memory, session-owned)      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lodge-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────────────┐ ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ reservation │ │ validation│  │   │
//! │  │   │   Guest   │  │   Money   │  │ state machine│ │   rules   │  │   │
//! │  │   │   Suite   │  │ discounts │  │   pricing   │ │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └─────────────┘ └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Guest, Suite, DiscountRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Long-stay discount policy and stay quotes
//! - [`reservation`] - Reservation lifecycle as an explicit state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Operator input rules
//!
//! ## Example Usage
//!
//! ```rust
//! use lodge_core::{Guest, Money, Reservation, Suite};
//!
//! let suite = Suite::new("Standard", 2, Money::from_cents(10_000));
//! let mut reservation = Reservation::new(12);
//! reservation.assign_suite(&suite).unwrap();
//! reservation
//!     .assign_guests(vec![Guest::new("Ana", "Silva"), Guest::new("Rui", "")])
//!     .unwrap();
//!
//! // 12 nights × 100.00, 10% long-stay discount
//! assert_eq!(reservation.total_price().unwrap().cents(), 108_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod reservation;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, SuiteCapacity, ValidationError};
pub use money::Money;
pub use pricing::StayQuote;
pub use reservation::{Reservation, ReservationState};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stays of at least this many days get the long-stay discount.
///
/// The threshold is inclusive: a 10-day stay qualifies, a 9-day stay does not.
pub const LONG_STAY_THRESHOLD_DAYS: u32 = 10;

/// Long-stay discount in basis points (1000 = 10%).
pub const LONG_STAY_DISCOUNT_BPS: u32 = 1000;

/// Maximum length of any name or label typed by the operator.
pub const MAX_NAME_LENGTH: usize = 100;
