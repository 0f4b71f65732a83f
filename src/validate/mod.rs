//! Account identifier validation.
//!
//! Classifies candidate identifiers and notifies an optional reporter of
//! defects. The reporter decouples validation from presentation: the shell
//! registers a console printer at startup, tests register recording
//! closures.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum accepted candidate length in bytes.
///
/// An input-buffer cap, one byte larger than the 9-character identifier
/// format it guards.
pub const MAX_INPUT_LEN: usize = 10;

/// Characters permitted in an account identifier: letters and the digits
/// 1-9. The digit '0' is excluded by the historical rule.
static VALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z1-9]*$").expect("Invalid account pattern"));

/// Outcome of validating a candidate identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationOutcome {
    /// The candidate is well-formed.
    #[default]
    Valid,
    /// The candidate exceeds `MAX_INPUT_LEN` bytes.
    InvalidLength,
    /// The candidate contains a character outside the permitted set.
    InvalidCharacter,
}

/// Defect reporter invoked synchronously on non-valid outcomes.
pub type Reporter = Box<dyn FnMut(ValidationOutcome)>;

/// Identifier validator with a retained status and an optional reporter.
///
/// Supports both notification styles: callers can react to the returned
/// outcome directly, or poll `current_status` after the fact.
#[derive(Default)]
pub struct Validator {
    reporter: Option<Reporter>,
    current: ValidationOutcome,
}

impl Validator {
    /// Create a validator with no reporter and a `Valid` status.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a defect reporter, replacing any previous one.
    pub fn register_reporter(&mut self, handler: Reporter) {
        self.reporter = Some(handler);
    }

    /// Classify `candidate` and retain the outcome as the current status.
    ///
    /// On a non-valid outcome the registered reporter, if any, is invoked
    /// before this returns. Valid outcomes are not reported.
    pub fn validate(&mut self, candidate: &str) -> ValidationOutcome {
        self.current = classify(candidate);

        if self.current != ValidationOutcome::Valid {
            if let Some(reporter) = self.reporter.as_mut() {
                reporter(self.current);
            }
        }

        self.current
    }

    /// The outcome of the most recent validation (`Valid` before any).
    pub fn current_status(&self) -> ValidationOutcome {
        self.current
    }
}

/// Apply the length rule, then the character-class rule.
fn classify(candidate: &str) -> ValidationOutcome {
    if candidate.len() > MAX_INPUT_LEN {
        ValidationOutcome::InvalidLength
    } else if !VALID_CHARS.is_match(candidate) {
        ValidationOutcome::InvalidCharacter
    } else {
        ValidationOutcome::Valid
    }
}
