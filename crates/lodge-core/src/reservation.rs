//! # Reservation
//!
//! A booking that binds guests to one suite for a number of days.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Reservation Lifecycle                                │
//! │                                                                         │
//! │  ┌──────────┐  assign_suite  ┌───────────────┐  assign_guests  ┌──────────────┐
//! │  │  Empty   │───────────────►│ SuiteAttached │────────────────►│  Configured  │
//! │  └──────────┘                └───────────────┘  (≤ capacity)   └──────────────┘
//! │       │                        │   ▲                                  │
//! │  assign_guests            assign_suite                     assign_suite / guests
//! │       │                   (replaces)                                  │
//! │       ▼                                                               ▼
//! │  CapacityExceeded                                      InvalidReservationState
//! │  (capacity: none)                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed call never changes the state: there is no partial assignment.
//!
//! ## Snapshot Pattern
//! The reservation keeps frozen copies of the suite and guests it was given.
//! Both are immutable once registered, so the copy always matches the
//! registry's record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, SuiteCapacity};
use crate::money::Money;
use crate::pricing::{quote_stay, StayQuote};
use crate::types::{Guest, Suite};

/// Where a reservation is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum ReservationState {
    /// Only the day count is known.
    Empty,
    /// A suite is attached, no guests yet.
    SuiteAttached { suite: Suite },
    /// Suite and guests are attached; the reservation is complete.
    Configured { suite: Suite, guests: Vec<Guest> },
}

impl ReservationState {
    /// Short name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ReservationState::Empty => "empty",
            ReservationState::SuiteAttached { .. } => "awaiting guests",
            ReservationState::Configured { .. } => "already configured",
        }
    }
}

/// A booking of one suite for a number of days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Unique identifier (UUID v4).
    pub id: String,

    days_reserved: u32,

    state: ReservationState,
}

impl Reservation {
    /// Creates an empty reservation for `days_reserved` days.
    ///
    /// The day count is validated by the caller (see
    /// [`crate::validation::validate_days`]).
    pub fn new(days_reserved: u32) -> Self {
        Reservation {
            id: Uuid::new_v4().to_string(),
            days_reserved,
            state: ReservationState::Empty,
        }
    }

    /// Number of days reserved.
    #[inline]
    pub fn days_reserved(&self) -> u32 {
        self.days_reserved
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> &ReservationState {
        &self.state
    }

    /// The attached suite, if any.
    pub fn suite(&self) -> Option<&Suite> {
        match &self.state {
            ReservationState::Empty => None,
            ReservationState::SuiteAttached { suite }
            | ReservationState::Configured { suite, .. } => Some(suite),
        }
    }

    /// The assigned guests in selection order (empty until configured).
    pub fn guests(&self) -> &[Guest] {
        match &self.state {
            ReservationState::Configured { guests, .. } => guests.as_slice(),
            _ => &[],
        }
    }

    /// Attaches the suite being booked.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidReservationState`] once guests are assigned,
    ///   since a new suite could no longer fit them.
    pub fn assign_suite(&mut self, suite: &Suite) -> CoreResult<()> {
        match self.state {
            ReservationState::Empty | ReservationState::SuiteAttached { .. } => {
                self.state = ReservationState::SuiteAttached {
                    suite: suite.clone(),
                };
                Ok(())
            }
            ReservationState::Configured { .. } => Err(CoreError::InvalidReservationState {
                current: self.state.name(),
                operation: "change the suite",
            }),
        }
    }

    /// Assigns the guest list, checked against the attached suite's capacity.
    ///
    /// ## Errors
    /// - [`CoreError::CapacityExceeded`] with capacity `none` when no suite
    ///   is attached
    /// - [`CoreError::CapacityExceeded`] when `guests.len()` exceeds capacity
    /// - [`CoreError::InvalidReservationState`] when guests were already
    ///   assigned
    ///
    /// ## Example
    /// ```rust
    /// use lodge_core::{CoreError, Guest, Money, Reservation, Suite};
    ///
    /// let suite = Suite::new("Luxo", 1, Money::from_cents(50_000));
    /// let mut reservation = Reservation::new(3);
    /// reservation.assign_suite(&suite).unwrap();
    ///
    /// let result = reservation.assign_guests(vec![Guest::new("Ana", ""), Guest::new("Rui", "")]);
    /// assert!(matches!(result, Err(CoreError::CapacityExceeded { received: 2, .. })));
    /// assert_eq!(reservation.guest_count(), 0);
    /// ```
    pub fn assign_guests(&mut self, guests: Vec<Guest>) -> CoreResult<()> {
        let suite = match &self.state {
            ReservationState::Empty => {
                return Err(CoreError::CapacityExceeded {
                    capacity: SuiteCapacity::Unassigned,
                    received: guests.len(),
                });
            }
            ReservationState::Configured { .. } => {
                return Err(CoreError::InvalidReservationState {
                    current: self.state.name(),
                    operation: "assign guests",
                });
            }
            ReservationState::SuiteAttached { suite } => suite,
        };

        if !suite.can_host(guests.len()) {
            return Err(CoreError::CapacityExceeded {
                capacity: suite.capacity_limit(),
                received: guests.len(),
            });
        }

        let suite = suite.clone();
        self.state = ReservationState::Configured { suite, guests };
        Ok(())
    }

    /// Number of assigned guests; 0 until guests are assigned.
    #[inline]
    pub fn guest_count(&self) -> usize {
        self.guests().len()
    }

    /// Whether suite and guests are both attached.
    #[inline]
    pub fn is_configured(&self) -> bool {
        matches!(self.state, ReservationState::Configured { .. })
    }

    /// Price breakdown of the stay.
    ///
    /// ## Errors
    /// - [`CoreError::PreconditionNotMet`] when no suite is attached
    /// - [`CoreError::AmountOverflow`] for absurd rate × days products
    pub fn quote(&self) -> CoreResult<StayQuote> {
        let suite = self.suite().ok_or(CoreError::PreconditionNotMet {
            operation: "total price",
            reason: "no suite is attached",
        })?;
        quote_stay(self.days_reserved, suite.nightly_rate)
    }

    /// Total price: `days × nightly rate`, minus 10% for stays of 10+ days.
    pub fn total_price(&self) -> CoreResult<Money> {
        self.quote().map(|quote| quote.total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
