//! Class-instance matcher.

use std::sync::Arc;

use sift_value::Value;

use crate::matcher::{MatchResult, Matcher};

/// Matches opaque objects whose class lineage contains `class`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceOf {
    class: Arc<str>,
}

impl InstanceOf {
    pub fn new(class: impl Into<Arc<str>>) -> Self {
        InstanceOf {
            class: class.into(),
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }
}

impl Matcher for InstanceOf {
    fn name(&self) -> &'static str {
        "instanceOf"
    }

    fn probe(&self, value: &Value) -> MatchResult {
        let matched = value
            .as_object()
            .is_some_and(|object| object.is_instance_of(&self.class));
        MatchResult::from_bool(matched)
    }
}
