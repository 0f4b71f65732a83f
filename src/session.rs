//! Application context for one program run.
//!
//! Bundles the registry and validator that every shell action operates on.
//! A single instance is constructed in `main` and handed to the shell,
//! with lifecycle equal to the program run.

use crate::registry::Registry;
use crate::validate::Validator;

/// Mutable state shared by all shell actions.
#[derive(Default)]
pub struct Session {
    /// The in-memory account roster.
    pub registry: Registry,
    /// The identifier validator and its defect reporter.
    pub validator: Validator,
}

impl Session {
    /// Create a session with an empty registry and an idle validator.
    pub fn new() -> Self {
        Self::default()
    }
}
