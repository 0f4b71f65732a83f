//! Roster: interactive console roster of student account identifiers.
//!
//! This is the main entry point for the `roster` CLI. It parses arguments,
//! hands a fresh session to the interactive shell, and handles errors with
//! proper exit codes.

mod cli;
pub mod error;
pub mod exit_codes;
pub mod registry;
pub mod session;
mod shell;
pub mod validate;

use cli::Cli;
use session::Session;
use shell::ShellOptions;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let mut session = Session::new();

    match shell::run(&mut session, &ShellOptions::from(&cli)) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
