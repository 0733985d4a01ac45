//! # Rendering
//!
//! Turns command DTOs into console text or JSON documents.
//!
//! ## Text Layout
//! ```text
//! === SUITES ===
//! 1 - Standard (Capacity: 2, Rate: R$ 100.00)
//! 2 - Luxo (Capacity: 1, Rate: R$ 500.00)
//!
//! === RESERVATION CREATED ===
//! Guests: 2
//! Suite: Standard
//! Days: 12
//! Total: R$ 1080.00
//! 10% discount applied for stays of 10 days or more
//! ```
//!
//! Amounts travel as cents and are formatted only here, through
//! [`ConfigState::format_currency`].

use colored::Colorize;
use serde::Serialize;

use crate::commands::guest::GuestDto;
use crate::commands::reservation::ReservationDto;
use crate::commands::suite::SuiteDto;
use crate::error::CliError;
use crate::state::ConfigState;
use lodge_core::{Money, LONG_STAY_DISCOUNT_BPS, LONG_STAY_THRESHOLD_DAYS};

/// Section title, bold when colors are on.
pub fn header(config: &ConfigState, title: &str) -> String {
    let line = format!("=== {} ===", title);
    if config.color {
        line.bold().cyan().to_string()
    } else {
        line
    }
}

/// Confirmation line for a successful action.
pub fn success(config: &ConfigState, message: &str) -> String {
    if config.color {
        message.green().to_string()
    } else {
        message.to_string()
    }
}

/// Error line for text output.
pub fn error(config: &ConfigState, err: &CliError) -> String {
    if config.color {
        err.message.red().to_string()
    } else {
        err.message.clone()
    }
}

/// Pretty-printed JSON document.
pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn guest_line(guest: &GuestDto) -> String {
    format!("{} - {}", guest.position, guest.full_name)
}

pub fn suite_line(config: &ConfigState, suite: &SuiteDto) -> String {
    format!(
        "{} - {} (Capacity: {}, Rate: {})",
        suite.position,
        suite.label,
        suite.capacity,
        config.format_currency(Money::from_cents(suite.nightly_rate_cents))
    )
}

/// Notice printed under the total of a discounted stay.
pub fn discount_notice() -> String {
    format!(
        "{}% discount applied for stays of {} days or more",
        LONG_STAY_DISCOUNT_BPS / 100,
        LONG_STAY_THRESHOLD_DAYS
    )
}

/// Summary printed right after a reservation is created.
pub fn reservation_created(config: &ConfigState, reservation: &ReservationDto) -> String {
    let mut lines = vec![
        header(config, "RESERVATION CREATED"),
        format!("Guests: {}", reservation.guest_count),
        format!("Suite: {}", reservation.suite),
        format!("Days: {}", reservation.days),
        format!(
            "Total: {}",
            config.format_currency(Money::from_cents(reservation.total_cents))
        ),
    ];
    if reservation.discount_applied {
        lines.push(discount_notice());
    }
    lines.join("\n")
}

/// One entry of the reservation listing.
pub fn reservation_entry(config: &ConfigState, reservation: &ReservationDto) -> String {
    [
        format!("Reservation {}:", reservation.position),
        format!("  Guests: {}", reservation.guest_count),
        format!("  Suite: {}", reservation.suite),
        format!("  Days: {}", reservation.days),
        format!(
            "  Total: {}",
            config.format_currency(Money::from_cents(reservation.total_cents))
        ),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> ConfigState {
        ConfigState {
            color: false,
            ..ConfigState::default()
        }
    }

    fn reservation(days: u32, total_cents: i64, discount_applied: bool) -> ReservationDto {
        ReservationDto {
            position: 1,
            id: "r-1".to_string(),
            guest_count: 2,
            guests: vec!["Ana Silva".to_string(), "Rui".to_string()],
            suite: "Standard".to_string(),
            days,
            nightly_rate_cents: 10_000,
            subtotal_cents: 120_000,
            discount_cents: 12_000,
            total_cents,
            discount_applied,
        }
    }

    #[test]
    fn test_header_without_color() {
        assert_eq!(header(&plain(), "GUESTS"), "=== GUESTS ===");
    }

    #[test]
    fn test_suite_line() {
        let suite = SuiteDto {
            position: 2,
            id: "s-2".to_string(),
            label: "Luxo".to_string(),
            capacity: 1,
            nightly_rate_cents: 50_000,
        };
        assert_eq!(
            suite_line(&plain(), &suite),
            "2 - Luxo (Capacity: 1, Rate: R$ 500.00)"
        );
    }

    #[test]
    fn test_reservation_created_with_discount() {
        let text = reservation_created(&plain(), &reservation(12, 108_000, true));
        assert_eq!(
            text,
            "=== RESERVATION CREATED ===\nGuests: 2\nSuite: Standard\nDays: 12\n\
             Total: R$ 1080.00\n10% discount applied for stays of 10 days or more"
        );
    }

    #[test]
    fn test_reservation_created_without_discount() {
        let text = reservation_created(&plain(), &reservation(3, 30_000, false));
        assert!(text.ends_with("Total: R$ 300.00"));
        assert!(!text.contains("discount"));
    }

    #[test]
    fn test_reservation_entry_uses_currency_symbol() {
        let config = ConfigState {
            currency_symbol: "US$".to_string(),
            ..plain()
        };
        let text = reservation_entry(&config, &reservation(12, 108_000, true));
        assert!(text.starts_with("Reservation 1:\n  Guests: 2"));
        assert!(text.ends_with("  Total: US$ 1080.00"));
    }

    #[test]
    fn test_json_uses_camel_case_cents() {
        let text = json(&reservation(12, 108_000, true)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["totalCents"], 108_000);
        assert_eq!(value["discountApplied"], true);
        assert_eq!(value["guests"][1], "Rui");
    }
}
