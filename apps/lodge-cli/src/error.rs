//! # Console Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Lodge                                  │
//! │                                                                         │
//! │  Menu option "3" (create reservation)                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, CliError>                                             │  │
//! │  │         │                                                        │  │
//! │  │  Bad input?     ─── ValidationError ─────────────┐               │  │
//! │  │  Too many guests? ─ CoreError::CapacityExceeded ─┤               │  │
//! │  │  Unknown id?    ─── RegistryError::NotFound ─────┼──► CliError   │  │
//! │  │         │                                        │               │  │
//! │  │  Success ────────────────────────────────────────┼──► Response   │  │
//! │  └──────────────────────────────────────────────────┼───────────────┘  │
//! │                                                     ▼                   │
//! │  Shell prints the message and returns to the menu. Only console I/O    │
//! │  failures (ErrorCode::Io) end the session.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::io;

use lodge_core::{CoreError, ValidationError};
use lodge_registry::RegistryError;
use serde::Serialize;

/// Error reported to the operator.
///
/// ## Serialization
/// With `--output json` failures are printed as:
/// ```json
/// {
///   "code": "CAPACITY_EXCEEDED",
///   "message": "Suite capacity is 1, but 2 guests were received"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for console responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Operator input failed validation
    ValidationError,

    /// Guest list does not fit the suite
    CapacityExceeded,

    /// Record not found
    NotFound,

    /// Reservation lifecycle or pricing rule
    BusinessLogic,

    /// Console streams failed
    Io,

    /// Rendering failed
    Internal,
}

impl CliError {
    /// Creates a new console error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a capacity error.
    pub fn capacity(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::CapacityExceeded, message)
    }

    /// Whether the session can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        self.code != ErrorCode::Io
    }
}

/// Upper-cases the first letter; validation messages start with a field name.
fn sentence_case(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::validation(sentence_case(&err.to_string()))
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CapacityExceeded { .. } => CliError::capacity(err.to_string()),
            CoreError::Validation(e) => CliError::from(e),
            CoreError::PreconditionNotMet { .. }
            | CoreError::InvalidReservationState { .. }
            | CoreError::AmountOverflow(_) => {
                CliError::new(ErrorCode::BusinessLogic, err.to_string())
            }
        }
    }
}

impl From<RegistryError> for CliError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { .. } => CliError::new(ErrorCode::NotFound, err.to_string()),
            RegistryError::Core(e) => CliError::from(e),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        tracing::error!("Console I/O failed: {}", err);
        CliError::new(ErrorCode::Io, format!("Console I/O failed: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON rendering failed: {}", err);
        CliError::new(ErrorCode::Internal, "Could not render output")
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}
