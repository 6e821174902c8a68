//! Predicate matchers.

use std::fmt;
use std::sync::Arc;

use sift_value::Value;

use crate::matcher::{MatchResult, Matcher};

/// Shared, thread-safe value predicate.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Matches when a user predicate holds. Never selects.
#[derive(Clone)]
pub struct Guard {
    predicate: Predicate,
    label: &'static str,
}

impl Guard {
    pub fn new(predicate: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Guard::labeled("guard", predicate)
    }

    pub(crate) fn labeled(
        label: &'static str,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Guard {
            predicate: Arc::new(predicate),
            label,
        }
    }

    pub fn test(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guard({})", self.label)
    }
}

impl Matcher for Guard {
    fn name(&self) -> &'static str {
        self.label
    }

    fn probe(&self, value: &Value) -> MatchResult {
        MatchResult::from_bool(self.test(value))
    }
}
