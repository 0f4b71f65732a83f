//! CLI argument parsing for roster.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! binary runs the interactive shell directly; the flags here only adjust
//! its presentation.

use clap::Parser;

/// Roster: interactive console roster of student account identifiers.
///
/// Runs a numbered menu over an in-memory roster: add, remove, list and
/// find accounts, with identifier validation on add. The roster lives for
/// the duration of the run; nothing is persisted.
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Do not pause or clear the screen between actions.
    ///
    /// Useful when input is piped rather than typed at a terminal.
    #[arg(long)]
    pub no_clear: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
