//! # Registry
//!
//! The session-owned container of all three repositories.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session (lodge-cli)                                                   │
//! │    └── Registry                 constructed once at startup            │
//! │          ├── GuestRepository     Vec<Guest>                            │
//! │          ├── SuiteRepository     Vec<Suite>                            │
//! │          └── ReservationRepository Vec<Reservation>                    │
//! │                                                                         │
//! │  Single-threaded: handed out as &Registry / &mut Registry, no locks.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::RegistryResult;
use crate::repository::guest::GuestRepository;
use crate::repository::reservation::ReservationRepository;
use crate::repository::suite::SuiteRepository;
use lodge_core::Reservation;

/// All registries of one session.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    guests: GuestRepository,
    suites: SuiteRepository,
    reservations: ReservationRepository,
}

impl Registry {
    /// Creates a registry with empty repositories.
    pub fn new() -> Self {
        Registry::default()
    }

    pub fn guests(&self) -> &GuestRepository {
        &self.guests
    }

    pub fn guests_mut(&mut self) -> &mut GuestRepository {
        &mut self.guests
    }

    pub fn suites(&self) -> &SuiteRepository {
        &self.suites
    }

    pub fn suites_mut(&mut self) -> &mut SuiteRepository {
        &mut self.suites
    }

    pub fn reservations(&self) -> &ReservationRepository {
        &self.reservations
    }

    /// Creates a reservation from listing positions.
    ///
    /// ## Arguments
    /// * `days` - Validated day count
    /// * `suite_position` - 1-based position in the suite listing
    /// * `guest_positions` - 1-based positions in the guest listing
    ///
    /// ## Errors
    /// Invalid positions or a capacity violation; the reservation list is
    /// unchanged in both cases.
    pub fn book(
        &mut self,
        days: u32,
        suite_position: usize,
        guest_positions: &[usize],
    ) -> RegistryResult<&Reservation> {
        debug!(days, suite_position, ?guest_positions, "Booking");

        let guests = self.guests.select(guest_positions)?;
        let suite = self.suites.get_by_position(suite_position)?;
        self.reservations.create(days, suite, guests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegistryError;
    use lodge_core::{CoreError, Money, SuiteCapacity};

    fn seeded() -> Registry {
        let mut registry = Registry::new();
        registry.guests_mut().register("Ana", "Silva");
        registry.guests_mut().register("Rui", "");
        registry
            .suites_mut()
            .register("Standard", 2, Money::from_cents(10_000));
        registry
            .suites_mut()
            .register("Luxo", 1, Money::from_cents(50_000));
        registry
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = Registry::new();
        assert!(registry.guests().is_empty());
        assert!(registry.suites().is_empty());
        assert!(registry.reservations().is_empty());
    }

    #[test]
    fn test_book_standard_suite() {
        let mut registry = seeded();
        let reservation = registry.book(12, 1, &[1, 2]).unwrap();

        assert_eq!(reservation.suite().unwrap().label, "Standard");
        assert_eq!(reservation.total_price().unwrap().cents(), 108_000);
        assert_eq!(registry.reservations().len(), 1);
    }

    #[test]
    fn test_book_over_capacity_keeps_registry_unchanged() {
        let mut registry = seeded();
        let err = registry.book(3, 2, &[1, 2]).unwrap_err();

        assert!(matches!(
            err,
            RegistryError::Core(CoreError::CapacityExceeded {
                capacity: SuiteCapacity::Limit(1),
                received: 2
            })
        ));
        assert!(registry.reservations().is_empty());
    }

    #[test]
    fn test_book_with_invalid_positions() {
        let mut registry = seeded();
        assert!(registry.book(3, 5, &[1]).is_err());
        assert!(registry.book(3, 1, &[7]).is_err());
        assert!(registry.reservations().is_empty());
    }

    #[test]
    fn test_suites_are_shared_between_reservations() {
        let mut registry = seeded();
        registry.book(2, 1, &[1]).unwrap();
        registry.book(10, 1, &[2]).unwrap();

        let suite_id = registry.suites().list()[0].id.clone();
        assert!(registry
            .reservations()
            .list()
            .iter()
            .all(|r| r.suite().map(|s| s.id.as_str()) == Some(suite_id.as_str())));
    }
}
