//! # Lodge Console Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Lodge Console                                    │
//! │                                                                         │
//! │  main.rs ────► Parses flags, maps the outcome to an exit code          │
//! │                                                                         │
//! │  lib.rs ─────► Logging, configuration, session                         │
//! │                                                                         │
//! │  shell.rs ───► Menu loop on stdin / stdout                             │
//! │                                                                         │
//! │  lodge-registry ──► Guests, suites, reservations (memory only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use clap::Parser;

use lodge_cli::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    // The actual setup is in lib.rs for better testability
    match lodge_cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lodge: {}", err);
            ExitCode::FAILURE
        }
    }
}
