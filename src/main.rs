//! Steerdiff: compare two Marlin steering files.
//!
//! This is the main entry point for the `steerdiff` CLI. It parses arguments,
//! runs the comparison, and maps errors to exit codes.

mod cli;
mod commands;
pub mod compare;
pub mod config;
pub mod error;
pub mod exit_codes;
mod logging;
pub mod render;
pub mod steering;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::from(err.exit_code() as u8);
        }
    };

    logging::init(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    match commands::cmd_compare(&cli, &mut stdout) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
