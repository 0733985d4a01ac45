//! # Console Commands
//!
//! One function per menu action. The shell reads the raw lines; commands
//! parse them, call the registry and return DTOs for rendering.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs          ◄─── You are here (shared parsing)
//! ├── guest.rs        ◄─── Register / list guests
//! ├── suite.rs        ◄─── Register / list suites
//! └── reservation.rs  ◄─── Selection parsing, create / list reservations
//! ```
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shell prompt "Days: " ──► "12"                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::reservation::parse_days("12") ──► Ok(12)                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::reservation::create_reservation(&mut registry, ...)          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<ReservationDto, CliError> ──► render::text / render::json       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod guest;
pub mod reservation;
pub mod suite;

use lodge_core::ValidationError;

/// Parses a whole number typed by the operator.
pub(crate) fn parse_integer(field: &str, input: &str) -> Result<i64, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    input.parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "not a whole number".to_string(),
    })
}
