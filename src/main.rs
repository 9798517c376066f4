//! Offshoot: git branch-naming helpers for feature work.
//!
//! This is the main entry point for the `offshoot` CLI. It parses
//! arguments, dispatches to the appropriate command handler, and maps
//! errors to exit codes.

mod cli;
mod commands;
mod error;
mod exit_codes;
mod git;
mod naming;
mod prompt;
mod refs;
#[cfg(test)]
mod test_support;
mod tracking;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
