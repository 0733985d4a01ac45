//! # Reservation Commands
//!
//! Menu options 3 (create) and 6 (list).
//!
//! ## Create Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Reservation Creation                                 │
//! │                                                                         │
//! │  no guests / no suites? ──► "No guests registered." ──► back to menu   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "1, 3, x, 9" ──► parse_guest_selection ──► positions [1, 3]           │
//! │                                          rejected  ["x", "9"]          │
//! │       │                                                                 │
//! │       ▼ (empty selection abandons)                                      │
//! │  "2" ──► parse_suite_selection ──► invalid? "Invalid suite"            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  check_capacity ──► "Suite Luxo holds at most 1 guests"                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "12" ──► parse_days ──► create_reservation ──► ReservationDto         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use super::parse_integer;
use crate::error::{CliError, ErrorCode};
use lodge_core::validation::{validate_days, validate_selection};
use lodge_core::{CoreError, Reservation};
use lodge_registry::{Registry, RegistryError};

/// Reservation as shown to the operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub position: usize,
    pub id: String,
    pub guest_count: usize,
    /// Full names in selection order
    pub guests: Vec<String>,
    pub suite: String,
    pub days: u32,
    pub nightly_rate_cents: i64,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    pub discount_applied: bool,
}

impl ReservationDto {
    fn new(position: usize, reservation: &Reservation) -> Result<Self, CliError> {
        let quote = reservation.quote()?;
        let suite = reservation
            .suite()
            .map(|s| s.label.clone())
            .unwrap_or_default();

        Ok(ReservationDto {
            position,
            id: reservation.id.clone(),
            guest_count: reservation.guest_count(),
            guests: reservation.guests().iter().map(|g| g.full_name()).collect(),
            suite,
            days: reservation.days_reserved(),
            nightly_rate_cents: quote.nightly_rate.cents(),
            subtotal_cents: quote.subtotal.cents(),
            discount_cents: quote.discount.cents(),
            total_cents: quote.total.cents(),
            discount_applied: quote.discount_applied(),
        })
    }
}

/// Outcome of parsing the comma-separated guest selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestSelection {
    /// Valid 1-based positions, first occurrence order, no duplicates
    pub positions: Vec<usize>,

    /// Entries that were not a listed position
    pub rejected: Vec<String>,
}

impl GuestSelection {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Fails early when there is nothing to book.
pub fn ensure_bookable(registry: &Registry) -> Result<(), CliError> {
    if registry.guests().is_empty() {
        return Err(CliError::new(ErrorCode::BusinessLogic, "No guests registered."));
    }
    if registry.suites().is_empty() {
        return Err(CliError::new(ErrorCode::BusinessLogic, "No suites registered."));
    }
    Ok(())
}

/// Parses a selection such as `"1, 3,3, x"` against a listing of `available` guests.
///
/// Unparsable and out-of-range entries are collected in `rejected`;
/// repeated positions are kept once.
pub fn parse_guest_selection(input: &str, available: usize) -> GuestSelection {
    let mut selection = GuestSelection::default();

    for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let position = entry
            .parse::<usize>()
            .ok()
            .filter(|&p| validate_selection("guest", p, available).is_ok());

        match position {
            Some(p) if selection.positions.contains(&p) => {
                debug!(position = p, "Ignoring repeated guest");
            }
            Some(p) => selection.positions.push(p),
            None => {
                warn!(entry, available, "Guest selection rejected");
                selection.rejected.push(entry.to_string());
            }
        }
    }

    selection
}

/// Parses the suite position; any invalid entry is "Invalid suite".
pub fn parse_suite_selection(input: &str, available: usize) -> Result<usize, CliError> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&p| validate_selection("suite", p, available).is_ok())
        .ok_or_else(|| {
            warn!(input, available, "Suite selection rejected");
            CliError::validation("Invalid suite")
        })
}

/// Checks the selected party against the suite before asking for days.
pub fn check_capacity(
    registry: &Registry,
    suite_position: usize,
    guest_count: usize,
) -> Result<(), CliError> {
    let suite = registry.suites().get_by_position(suite_position)?;
    if suite.can_host(guest_count) {
        return Ok(());
    }

    warn!(suite = %suite.label, capacity = suite.capacity, guest_count, "Party too large");
    Err(CliError::capacity(format!(
        "Suite {} holds at most {} guests",
        suite.label, suite.capacity
    )))
}

/// Parses the number of days: a positive whole number.
pub fn parse_days(input: &str) -> Result<u32, CliError> {
    let days = parse_integer("days", input).and_then(validate_days);
    days.map_err(|e| {
        warn!(input, error = %e, "Days rejected");
        e.into()
    })
}

/// Creates and stores a reservation.
///
/// ## Errors
/// Reservation failures are reported as
/// `"Could not create reservation: <reason>"`; nothing is stored.
pub fn create_reservation(
    registry: &mut Registry,
    days: u32,
    suite_position: usize,
    guest_positions: &[usize],
) -> Result<ReservationDto, CliError> {
    debug!(days, suite_position, ?guest_positions, "create_reservation command");

    let position = registry.reservations().len() + 1;
    let reservation = registry
        .book(days, suite_position, guest_positions)
        .map_err(creation_failed)?;

    ReservationDto::new(position, reservation)
}

fn creation_failed(err: RegistryError) -> CliError {
    let rule_violation = matches!(
        &err,
        RegistryError::Core(CoreError::CapacityExceeded { .. })
            | RegistryError::Core(CoreError::InvalidReservationState { .. })
            | RegistryError::Core(CoreError::PreconditionNotMet { .. })
            | RegistryError::Core(CoreError::AmountOverflow(_))
    );

    let mut cli: CliError = err.into();
    if rule_violation {
        cli.message = format!("Could not create reservation: {}", cli.message);
    }
    cli
}

/// Lists all reservations with their totals.
pub fn list_reservations(registry: &Registry) -> Result<Vec<ReservationDto>, CliError> {
    registry
        .reservations()
        .list()
        .iter()
        .enumerate()
        .map(|(i, reservation)| ReservationDto::new(i + 1, reservation))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodge_core::Money;

    fn seeded() -> Registry {
        let mut registry = Registry::new();
        registry.guests_mut().register("Ana", "Silva");
        registry.guests_mut().register("Rui", "");
        registry.guests_mut().register("Bia", "Costa");
        registry
            .suites_mut()
            .register("Standard", 2, Money::from_cents(10_000));
        registry
            .suites_mut()
            .register("Luxo", 1, Money::from_cents(50_000));
        registry
    }

    #[test]
    fn test_ensure_bookable() {
        let mut registry = Registry::new();
        assert_eq!(ensure_bookable(&registry).unwrap_err().message, "No guests registered.");

        registry.guests_mut().register("Ana", "");
        assert_eq!(ensure_bookable(&registry).unwrap_err().message, "No suites registered.");

        registry.suites_mut().register("Standard", 2, Money::zero());
        assert!(ensure_bookable(&registry).is_ok());
    }

    #[test]
    fn test_parse_guest_selection() {
        let selection = parse_guest_selection("1, 3,x, 9,,0", 3);
        assert_eq!(selection.positions, vec![1, 3]);
        assert_eq!(selection.rejected, vec!["x", "9", "0"]);
    }

    #[test]
    fn test_parse_guest_selection_ignores_duplicates() {
        let selection = parse_guest_selection("2,2, 1 ,2", 3);
        assert_eq!(selection.positions, vec![2, 1]);
        assert!(selection.rejected.is_empty());
    }

    #[test]
    fn test_parse_guest_selection_empty() {
        assert!(parse_guest_selection("", 3).is_empty());
        assert!(parse_guest_selection(" , ", 3).is_empty());
        assert!(parse_guest_selection("7", 3).is_empty());
    }

    #[test]
    fn test_parse_suite_selection() {
        assert_eq!(parse_suite_selection(" 2 ", 2).unwrap(), 2);
        for input in ["0", "3", "", "abc", "-1"] {
            assert_eq!(parse_suite_selection(input, 2).unwrap_err().message, "Invalid suite");
        }
    }

    #[test]
    fn test_check_capacity() {
        let registry = seeded();
        assert!(check_capacity(&registry, 1, 2).is_ok());

        let err = check_capacity(&registry, 2, 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::CapacityExceeded);
        assert_eq!(err.message, "Suite Luxo holds at most 1 guests");
    }

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_days("12").unwrap(), 12);
        assert_eq!(parse_days("0").unwrap_err().message, "Days must be positive");
        assert!(parse_days("-2").is_err());
        assert!(parse_days("ten").is_err());
    }

    #[test]
    fn test_create_reservation_with_discount() {
        let mut registry = seeded();
        let dto = create_reservation(&mut registry, 12, 1, &[1, 2]).unwrap();

        assert_eq!(dto.position, 1);
        assert_eq!(dto.guest_count, 2);
        assert_eq!(dto.guests, vec!["Ana Silva", "Rui"]);
        assert_eq!(dto.suite, "Standard");
        assert_eq!(dto.subtotal_cents, 120_000);
        assert_eq!(dto.discount_cents, 12_000);
        assert_eq!(dto.total_cents, 108_000);
        assert!(dto.discount_applied);
    }

    #[test]
    fn test_create_reservation_without_discount() {
        let mut registry = seeded();
        let dto = create_reservation(&mut registry, 9, 2, &[3]).unwrap();

        assert_eq!(dto.total_cents, 450_000);
        assert_eq!(dto.discount_cents, 0);
        assert!(!dto.discount_applied);
    }

    #[test]
    fn test_create_reservation_over_capacity() {
        let mut registry = seeded();
        let err = create_reservation(&mut registry, 3, 2, &[1, 2]).unwrap_err();

        assert_eq!(err.code, ErrorCode::CapacityExceeded);
        assert_eq!(
            err.message,
            "Could not create reservation: Suite capacity is 1, but 2 guests were received"
        );
        assert!(registry.reservations().is_empty());
    }

    #[test]
    fn test_create_reservation_invalid_suite_position() {
        let mut registry = seeded();
        let err = create_reservation(&mut registry, 3, 9, &[1]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(registry.reservations().is_empty());
    }

    #[test]
    fn test_list_reservations() {
        let mut registry = seeded();
        assert!(list_reservations(&registry).unwrap().is_empty());

        create_reservation(&mut registry, 2, 1, &[1]).unwrap();
        create_reservation(&mut registry, 10, 2, &[2]).unwrap();

        let listed = list_reservations(&registry).unwrap();
        let rows: Vec<(usize, &str, i64)> = listed
            .iter()
            .map(|r| (r.position, r.suite.as_str(), r.total_cents))
            .collect();
        assert_eq!(rows, vec![(1, "Standard", 20_000), (2, "Luxo", 450_000)]);
    }
}
