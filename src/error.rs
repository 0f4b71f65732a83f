//! Error types for the roster CLI.
//!
//! Uses thiserror for derive macros. Validation defects and lookup misses
//! are ordinary values surfaced as console messages, not errors; only
//! terminal I/O failures abort the program.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for roster operations.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl RosterError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RosterError::Io(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
