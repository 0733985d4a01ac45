//! # Configuration State
//!
//! Console configuration assembled at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--currency-symbol`, `--output`, `--no-color`)
//! 2. Environment variables (`LODGE_*`, `NO_COLOR`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup.

use crate::cli::Args;
use lodge_core::Money;

/// How listings and results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,

    /// Pretty-printed JSON documents
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Console configuration.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// Prefix for every displayed amount
    pub currency_symbol: String,

    /// Listing format
    pub output: OutputFormat,

    /// Colored headers and error lines
    pub color: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Currency: `R$`
    /// - Output: text
    /// - Colors: enabled
    fn default() -> Self {
        ConfigState {
            currency_symbol: "R$".to_string(),
            output: OutputFormat::Text,
            color: true,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `LODGE_CURRENCY_SYMBOL`: Override the currency prefix
    /// - `LODGE_OUTPUT`: `text` or `json`
    /// - `NO_COLOR`: Disable colors when set to anything non-empty
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(symbol) = lookup("LODGE_CURRENCY_SYMBOL") {
            if !symbol.trim().is_empty() {
                config.currency_symbol = symbol.trim().to_string();
            }
        }

        if let Some(output) = lookup("LODGE_OUTPUT") {
            match OutputFormat::parse(&output) {
                Some(format) => config.output = format,
                None => tracing::warn!(value = %output, "Ignoring unknown LODGE_OUTPUT"),
            }
        }

        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }

        config
    }

    /// Applies command-line flags on top of this configuration.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(symbol) = &args.currency_symbol {
            self.currency_symbol = symbol.clone();
        }
        if let Some(output) = args.output {
            self.output = output;
        }
        if args.no_color {
            self.color = false;
        }
        self
    }

    /// Formats an amount with the currency prefix and two decimals.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(108_000)), "R$ 1080.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        if amount.is_negative() {
            format!("-{} {}", self.currency_symbol, Money::zero() - amount)
        } else {
            format!("{} {}", self.currency_symbol, amount)
        }
    }
}
