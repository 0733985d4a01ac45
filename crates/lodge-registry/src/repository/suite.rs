//! # Suite Repository
//!
//! Registration, listing and selection of suites.

use tracing::info;

use crate::error::{RegistryError, RegistryResult};
use lodge_core::validation::validate_selection;
use lodge_core::{Money, Suite};

/// Repository for suites, in registration order.
#[derive(Debug, Clone, Default)]
pub struct SuiteRepository {
    suites: Vec<Suite>,
}

impl SuiteRepository {
    /// Creates an empty SuiteRepository.
    pub fn new() -> Self {
        SuiteRepository::default()
    }

    /// Registers a suite and returns the stored record.
    ///
    /// The caller validates label, capacity and rate beforehand.
    pub fn register(&mut self, label: &str, capacity: u32, nightly_rate: Money) -> &Suite {
        let suite = Suite::new(label.trim(), capacity, nightly_rate);
        info!(
            suite_id = %suite.id,
            label = %suite.label,
            capacity,
            nightly_rate_cents = nightly_rate.cents(),
            "Suite registered"
        );
        self.suites.push(suite);
        &self.suites[self.suites.len() - 1]
    }

    /// All suites in registration order.
    pub fn list(&self) -> &[Suite] {
        &self.suites
    }

    /// Gets a suite by ID.
    pub fn get_by_id(&self, id: &str) -> RegistryResult<&Suite> {
        self.suites
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| RegistryError::not_found("Suite", id))
    }

    /// Gets a suite by its 1-based position in [`list`](Self::list).
    pub fn get_by_position(&self, position: usize) -> RegistryResult<&Suite> {
        let index = validate_selection("suite", position, self.suites.len())?;
        Ok(&self.suites[index])
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_list() {
        let mut repo = SuiteRepository::new();
        assert!(repo.is_empty());

        let suite = repo.register(" Standard ", 2, Money::from_cents(10_000));
        assert_eq!(suite.label, "Standard");
        assert_eq!(suite.capacity, 2);

        repo.register("Luxo", 1, Money::from_cents(50_000));
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.list()[1].label, "Luxo");
    }

    #[test]
    fn test_lookups() {
        let mut repo = SuiteRepository::new();
        let id = repo.register("Standard", 2, Money::from_cents(10_000)).id.clone();

        assert_eq!(repo.get_by_id(&id).unwrap().label, "Standard");
        assert_eq!(repo.get_by_position(1).unwrap().id, id);
        assert!(repo.get_by_position(0).is_err());
        assert!(repo.get_by_position(2).is_err());
        assert!(matches!(
            repo.get_by_id("nope"),
            Err(RegistryError::NotFound { .. })
        ));
    }
}
