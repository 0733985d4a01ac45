//! # State Module
//!
//! Everything the console holds for the lifetime of one process.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State                                        │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │        Registry          │        │       ConfigState        │      │
//! │  │                          │        │                          │      │
//! │  │  guests / suites /       │        │  currency_symbol         │      │
//! │  │  reservations            │        │  output, color           │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! │                                                                         │
//! │  Registry: mutated by commands through &mut, single thread             │
//! │  ConfigState: read-only after startup                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigState, OutputFormat};
pub use session::Session;
