//! # Repository Module
//!
//! In-memory repository implementations for Lodge.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Console command                                                       │
//! │       │                                                                 │
//! │       │  registry.suites().get_by_position(2)                          │
//! │       ▼                                                                 │
//! │  SuiteRepository                                                       │
//! │  ├── register(&mut self, label, capacity, rate)                        │
//! │  ├── list(&self)              (insertion order)                        │
//! │  ├── get_by_id(&self, id)                                              │
//! │  └── get_by_position(&self, n)  (1-based, as listed to the operator)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Suite>  (owned by the session's Registry)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are append-only: nothing is edited or deleted during a session.
//!
//! ## Available Repositories
//!
//! - [`guest::GuestRepository`] - Guest registration and selection
//! - [`suite::SuiteRepository`] - Suite registration and selection
//! - [`reservation::ReservationRepository`] - Reservation creation and listing

pub mod guest;
pub mod reservation;
pub mod suite;
