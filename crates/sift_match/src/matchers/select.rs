//! Selection matcher.

use sift_value::Value;

use crate::evaluator::match_pattern;
use crate::keys::{selection_shape, SelectionShape};
use crate::matcher::{MatchResult, Matcher};
use crate::pattern::Pattern;
use crate::selection::{SelectionKey, Selections};

/// Records the current value under a key.
///
/// With an inner pattern the value must match it first; the inner
/// pattern's own selections come before this one.
#[derive(Clone, Debug)]
pub struct Select {
    key: SelectionKey,
    inner: Option<Box<Pattern>>,
}

impl Select {
    pub fn new(key: SelectionKey, inner: Option<Pattern>) -> Self {
        Select {
            key,
            inner: inner.map(Box::new),
        }
    }

    pub fn key(&self) -> &SelectionKey {
        &self.key
    }
}

impl Matcher for Select {
    fn name(&self) -> &'static str {
        "select"
    }

    fn probe(&self, value: &Value) -> MatchResult {
        let mut selections = Selections::new();
        if let Some(inner) = &self.inner {
            if !match_pattern(inner, value, &mut selections) {
                return MatchResult::failure();
            }
        }
        selections.insert(self.key.clone(), value.clone());
        MatchResult::success(selections)
    }

    fn selection_shape(&self) -> SelectionShape {
        let inner = self
            .inner
            .as_deref()
            .map_or_else(SelectionShape::empty, selection_shape);
        inner.then(SelectionShape::single(self.key.clone()))
    }

    fn is_optional(&self) -> bool {
        self.inner.as_deref().is_some_and(Pattern::is_optional)
    }
}

#[cfg(test)]
mod tests;
