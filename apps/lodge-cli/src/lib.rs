//! # Lodge Console Library
//!
//! The interactive operator console for guests, suites and reservations.
//!
//! ## Module Organization
//! ```text
//! lodge_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── Command-line flags (clap)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── ConfigState (defaults, env, flags)
//! │   └── session.rs  ◄─── Session (registry + config)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Shared input parsing
//! │   ├── guest.rs    ◄─── Register / list guests
//! │   ├── suite.rs    ◄─── Register / list suites
//! │   └── reservation.rs ◄─ Create / list reservations
//! ├── render.rs       ◄─── Text and JSON output
//! ├── shell.rs        ◄─── Menu loop over BufRead / Write
//! └── error.rs        ◄─── CliError for console responses
//! ```
//!
//! ## Startup Sequence
//! 1. Parse flags
//! 2. Initialize tracing (stderr)
//! 3. Build ConfigState (defaults → env → flags)
//! 4. Create the Session (empty registries)
//! 5. Run the menu on stdin/stdout

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;
pub mod shell;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Args;
use error::CliError;
use shell::Shell;
use state::{ConfigState, Session};

/// Runs the console until the operator exits.
///
/// ## Errors
/// Console I/O failures only.
pub fn run(args: Args) -> Result<(), CliError> {
    init_tracing(&args.log_level);

    let config = ConfigState::from_env().with_args(&args);
    info!(
        currency = %config.currency_symbol,
        output = ?config.output,
        color = config.color,
        "Starting Lodge console"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), Session::new(config));
    shell.run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every menu option and command
/// - `RUST_LOG=lodge_registry=info` - Registrations and bookings only
/// - Default: `--log-level`, which defaults to `warn`
///
/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
