//! # Reservation Repository
//!
//! Creation and listing of reservations.
//!
//! ## Creation Is All-or-Nothing
//! ```text
//! create(days, suite, guests)
//!      │
//!      ▼
//! Reservation::new(days) ──► assign_suite ──► assign_guests
//!      │                                          │
//!      │                          CapacityExceeded? ──► Err, nothing stored
//!      ▼
//! reservations.push(reservation)
//! ```

use tracing::{debug, info};

use crate::error::{RegistryError, RegistryResult};
use lodge_core::{Guest, Reservation, Suite};

/// Repository for reservations, in creation order.
#[derive(Debug, Clone, Default)]
pub struct ReservationRepository {
    reservations: Vec<Reservation>,
}

impl ReservationRepository {
    /// Creates an empty ReservationRepository.
    pub fn new() -> Self {
        ReservationRepository::default()
    }

    /// Builds a reservation and stores it only if every step succeeds.
    ///
    /// ## Errors
    /// Any [`lodge_core::CoreError`] raised by the reservation lifecycle,
    /// typically `CapacityExceeded`.
    pub fn create(
        &mut self,
        days: u32,
        suite: &Suite,
        guests: Vec<Guest>,
    ) -> RegistryResult<&Reservation> {
        debug!(days, suite_id = %suite.id, guests = guests.len(), "Creating reservation");

        let mut reservation = Reservation::new(days);
        reservation.assign_suite(suite)?;
        reservation.assign_guests(guests)?;
        let total = reservation.total_price()?;

        info!(
            reservation_id = %reservation.id,
            suite = %suite.label,
            days,
            guests = reservation.guest_count(),
            total_cents = total.cents(),
            "Reservation created"
        );

        self.reservations.push(reservation);
        Ok(&self.reservations[self.reservations.len() - 1])
    }

    /// All reservations in creation order.
    pub fn list(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Gets a reservation by ID.
    pub fn get_by_id(&self, id: &str) -> RegistryResult<&Reservation> {
        self.reservations
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| RegistryError::not_found("Reservation", id))
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}
