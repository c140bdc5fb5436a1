//! Waycycle - subset-restricted cycle detection CLI
//!
//! Checks whether a directed cycle exists among a caller-chosen subset of
//! named nodes, using a traversal engine and a declarative query engine
//! that must agree.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, OutputFormat};
use waycycle_core::error::ExitCode as WaycycleExitCode;
use waycycle_core::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match commands::run(&cli) {
        Ok(()) => ExitCode::from(WaycycleExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(e.exit_code() as u8)
        }
    }
}
