//! # Suite Commands
//!
//! Menu options 2 (register) and 5 (list).
//!
//! ## Registration Prompts
//! ```text
//! Suite type: ──► validate_suite_label ──► invalid? print, abandon
//! Capacity:   ──► parse_capacity       ──► invalid? print, abandon
//! Nightly rate: ► parse_nightly_rate   ──► invalid? print, abandon
//!                        │
//!                        ▼
//!                 register_suite
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use super::parse_integer;
use crate::error::CliError;
use lodge_core::validation::{validate_capacity, validate_nightly_rate, validate_suite_label};
use lodge_core::{Money, Suite, ValidationError};
use lodge_registry::Registry;

/// Suite as shown to the operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteDto {
    /// 1-based position used by the reservation prompt
    pub position: usize,
    pub id: String,
    pub label: String,
    pub capacity: u32,
    pub nightly_rate_cents: i64,
}

impl SuiteDto {
    fn new(position: usize, suite: &Suite) -> Self {
        SuiteDto {
            position,
            id: suite.id.clone(),
            label: suite.label.clone(),
            capacity: suite.capacity,
            nightly_rate_cents: suite.nightly_rate.cents(),
        }
    }
}

/// Validates the suite type typed by the operator.
pub fn check_label(input: &str) -> Result<(), CliError> {
    validate_suite_label(input).map_err(|e| {
        warn!(error = %e, "Suite label rejected");
        e.into()
    })
}

/// Parses a capacity: a positive whole number.
pub fn parse_capacity(input: &str) -> Result<u32, CliError> {
    let capacity = parse_integer("capacity", input).and_then(validate_capacity);
    capacity.map_err(|e| {
        warn!(input, error = %e, "Capacity rejected");
        e.into()
    })
}

/// Parses a nightly rate: a non-negative amount with at most two decimals.
pub fn parse_nightly_rate(input: &str) -> Result<Money, CliError> {
    let rate = input
        .parse::<Money>()
        .map_err(rename_amount_field)
        .and_then(|rate| validate_nightly_rate(rate).map(|_| rate));

    rate.map_err(|e| {
        warn!(input, error = %e, "Nightly rate rejected");
        e.into()
    })
}

/// Amount parsing reports on a generic "amount" field.
fn rename_amount_field(err: ValidationError) -> ValidationError {
    let field = "nightly rate".to_string();
    match err {
        ValidationError::Required { .. } => ValidationError::Required { field },
        ValidationError::InvalidFormat { reason, .. } => {
            ValidationError::InvalidFormat { field, reason }
        }
        other => other,
    }
}

/// Registers a suite from already parsed values.
pub fn register_suite(
    registry: &mut Registry,
    label: &str,
    capacity: u32,
    nightly_rate: Money,
) -> Result<SuiteDto, CliError> {
    debug!(label, capacity, rate_cents = nightly_rate.cents(), "register_suite command");

    check_label(label)?;
    validate_nightly_rate(nightly_rate)?;

    let suites = registry.suites_mut();
    let suite = suites.register(label, capacity, nightly_rate).clone();
    Ok(SuiteDto::new(suites.len(), &suite))
}

/// Lists all suites in registration order.
pub fn list_suites(registry: &Registry) -> Vec<SuiteDto> {
    registry
        .suites()
        .list()
        .iter()
        .enumerate()
        .map(|(i, suite)| SuiteDto::new(i + 1, suite))
        .collect()
}
