//! # Guest Repository
//!
//! Registration, listing and selection of guests.

use tracing::{debug, info};

use crate::error::{RegistryError, RegistryResult};
use lodge_core::validation::validate_selection;
use lodge_core::Guest;

/// Repository for guests, in registration order.
#[derive(Debug, Clone, Default)]
pub struct GuestRepository {
    guests: Vec<Guest>,
}

impl GuestRepository {
    /// Creates an empty GuestRepository.
    pub fn new() -> Self {
        GuestRepository::default()
    }

    /// Registers a guest and returns the stored record.
    ///
    /// The caller validates the first name beforehand.
    pub fn register(&mut self, first_name: &str, last_name: &str) -> &Guest {
        let guest = Guest::new(first_name.trim(), last_name.trim());
        info!(guest_id = %guest.id, name = %guest.full_name(), "Guest registered");
        self.push(guest)
    }

    fn push(&mut self, guest: Guest) -> &Guest {
        self.guests.push(guest);
        &self.guests[self.guests.len() - 1]
    }

    /// All guests in registration order.
    pub fn list(&self) -> &[Guest] {
        &self.guests
    }

    /// Gets a guest by ID.
    pub fn get_by_id(&self, id: &str) -> RegistryResult<&Guest> {
        self.guests
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| RegistryError::not_found("Guest", id))
    }

    /// Gets a guest by its 1-based position in [`list`](Self::list).
    pub fn get_by_position(&self, position: usize) -> RegistryResult<&Guest> {
        let index = validate_selection("guest", position, self.guests.len())?;
        Ok(&self.guests[index])
    }

    /// Snapshots the guests at the given 1-based positions, in the order given.
    ///
    /// ## Errors
    /// Fails on the first invalid position; nothing is returned in that case.
    pub fn select(&self, positions: &[usize]) -> RegistryResult<Vec<Guest>> {
        debug!(?positions, "Selecting guests");
        positions
            .iter()
            .map(|&position| self.get_by_position(position).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }
}
