//! # Guest Commands
//!
//! Menu options 1 (register) and 4 (list).

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::CliError;
use lodge_core::validation::{validate_first_name, validate_last_name};
use lodge_core::Guest;
use lodge_registry::Registry;

/// Guest as shown to the operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestDto {
    /// 1-based position used by the reservation prompt
    pub position: usize,
    pub id: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub full_name: String,
}

impl GuestDto {
    fn new(position: usize, guest: &Guest) -> Self {
        GuestDto {
            position,
            id: guest.id.clone(),
            first_name: guest.first_name.clone(),
            last_name: guest.last_name.clone(),
            full_name: guest.full_name(),
        }
    }
}

/// Registers a guest after validating both names.
///
/// ## Errors
/// `ValidationError` when the first name is blank or either name is too long.
/// Nothing is registered in that case.
pub fn register_guest(
    registry: &mut Registry,
    first_name: &str,
    last_name: &str,
) -> Result<GuestDto, CliError> {
    debug!(first_name, last_name, "register_guest command");

    if let Err(e) = validate_first_name(first_name).and_then(|_| validate_last_name(last_name)) {
        warn!(error = %e, "Guest rejected");
        return Err(e.into());
    }

    let guests = registry.guests_mut();
    let guest = guests.register(first_name, last_name).clone();
    Ok(GuestDto::new(guests.len(), &guest))
}

/// Lists all guests in registration order.
pub fn list_guests(registry: &Registry) -> Vec<GuestDto> {
    registry
        .guests()
        .list()
        .iter()
        .enumerate()
        .map(|(i, guest)| GuestDto::new(i + 1, guest))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_register_guest() {
        let mut registry = Registry::new();
        let dto = register_guest(&mut registry, "Ana", "Silva").unwrap();

        assert_eq!(dto.position, 1);
        assert_eq!(dto.full_name, "Ana Silva");
        assert_eq!(registry.guests().len(), 1);

        let dto = register_guest(&mut registry, "Rui", "  ").unwrap();
        assert_eq!(dto.position, 2);
        assert_eq!(dto.last_name, None);
    }

    #[test]
    fn test_blank_first_name_registers_nothing() {
        let mut registry = Registry::new();
        let err = register_guest(&mut registry, "   ", "Silva").unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "First name is required");
        assert!(registry.guests().is_empty());
    }

    #[test]
    fn test_overlong_last_name_is_rejected() {
        let mut registry = Registry::new();
        let long = "x".repeat(101);
        assert!(register_guest(&mut registry, "Ana", &long).is_err());
        assert!(registry.guests().is_empty());
    }

    #[test]
    fn test_list_guests_positions() {
        let mut registry = Registry::new();
        register_guest(&mut registry, "Ana", "").unwrap();
        register_guest(&mut registry, "Rui", "Costa").unwrap();

        let listed = list_guests(&registry);
        let rows: Vec<(usize, &str)> = listed
            .iter()
            .map(|g| (g.position, g.full_name.as_str()))
            .collect();
        assert_eq!(rows, vec![(1, "Ana"), (2, "Rui Costa")]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut registry = Registry::new();
        let dto = register_guest(&mut registry, "Ana", "Silva").unwrap();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["fullName"], "Ana Silva");
        assert_eq!(json["firstName"], "Ana");
    }
}
