//! Error types for clause dispatch and pattern analysis.
//!
//! Two families are kept apart so callers can tell a broken pattern from a
//! value that simply did not match:
//!
//! - [`PatternError`] is raised when a pattern is registered, before any
//!   clause is evaluated.
//! - [`NonExhaustiveError`] is raised by the terminal operations when no
//!   clause accepted the input.

use std::sync::Arc;

use sift_value::{to_json_string, Value};
use thiserror::Error;

/// No clause matched the input.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("Pattern matching error: no pattern matches value {rendered}")]
pub struct NonExhaustiveError {
    input: Value,
    rendered: String,
}

impl NonExhaustiveError {
    pub fn new(input: Value) -> Self {
        let rendered = match to_json_string(&input) {
            Ok(json) => json,
            Err(err) => {
                tracing::trace!(%err, "input is not JSON-serializable, using display form");
                input.to_string()
            }
        };
        NonExhaustiveError { input, rendered }
    }

    /// The unmatched input value.
    pub fn input(&self) -> &Value {
        &self.input
    }

    pub fn into_input(self) -> Value {
        self.input
    }
}

/// A pattern whose selections cannot be bound unambiguously.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Two anonymous selections are reachable in the same branch.
    #[error("a pattern can only contain one anonymous selection per branch")]
    MultipleAnonymousSelections,
    /// Anonymous and named selections appear in the same pattern.
    #[error("a pattern cannot mix anonymous and named selections")]
    MixedSelections,
    /// A named key is declared twice outside of mutually exclusive branches.
    #[error("selection `{key}` is declared more than once in the same branch")]
    DuplicateSelection { key: Arc<str> },
}

/// Failure of a terminal clause operation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MatchError {
    #[error(transparent)]
    NonExhaustive(#[from] NonExhaustiveError),
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] PatternError),
}

impl MatchError {
    pub fn is_non_exhaustive(&self) -> bool {
        matches!(self, MatchError::NonExhaustive(_))
    }

    /// The unmatched input, for `NonExhaustive` failures.
    pub fn input(&self) -> Option<&Value> {
        match self {
            MatchError::NonExhaustive(err) => Some(err.input()),
            MatchError::InvalidPattern(_) => None,
        }
    }
}

#[cfg(test)]
mod tests;
