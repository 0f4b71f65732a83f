//! Exit code constants for the roster CLI.
//!
//! - 0: Success (menu exit or end of input)
//! - 1: Terminal I/O failure

/// Successful execution, including exit via the menu or end of input.
pub const SUCCESS: i32 = 0;

/// Terminal I/O failure while driving the shell.
pub const IO_FAILURE: i32 = 1;
