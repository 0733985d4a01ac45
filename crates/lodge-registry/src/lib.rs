//! # lodge-registry: In-Memory Registries for Lodge
//!
//! This crate owns every guest, suite and reservation for the lifetime of a
//! console session. Nothing is persisted: the data lives as long as the
//! [`Registry`] value that holds it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Lodge Data Flow                                │
//! │                                                                         │
//! │  Console command (create reservation)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  lodge-registry (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────────────────────────┐   │   │
//! │  │   │   Registry    │    │  Repositories                     │   │   │
//! │  │   │ (registry.rs) │───►│  GuestRepository                  │   │   │
//! │  │   │               │    │  SuiteRepository                  │   │   │
//! │  │   │ session-owned │    │  ReservationRepository            │   │   │
//! │  │   └───────────────┘    └───────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lodge-core: Reservation state machine, pricing, validation            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use lodge_core::Money;
//! use lodge_registry::Registry;
//!
//! let mut registry = Registry::new();
//! registry.guests_mut().register("Ana", "Silva");
//! registry.guests_mut().register("Rui", "");
//! registry.suites_mut().register("Standard", 2, Money::from_cents(10_000));
//!
//! let reservation = registry.book(12, 1, &[1, 2]).unwrap();
//! assert_eq!(reservation.total_price().unwrap().cents(), 108_000);
//! assert_eq!(registry.reservations().len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod registry;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{RegistryError, RegistryResult};
pub use registry::Registry;

pub use repository::guest::GuestRepository;
pub use repository::reservation::ReservationRepository;
pub use repository::suite::SuiteRepository;
