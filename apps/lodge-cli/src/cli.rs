//! Command-line flags of the `lodge` binary.

use clap::Parser;

use crate::state::OutputFormat;

/// Interactive lodging reservation console.
#[derive(Debug, Clone, Parser)]
#[command(name = "lodge", version, about)]
pub struct Args {
    /// Prefix printed before every amount (default "R$")
    #[arg(long, value_name = "SYMBOL")]
    pub currency_symbol: Option<String>,

    /// Render listings and results as text or JSON
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Disable colored headers and error lines
    #[arg(long)]
    pub no_color: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}
