//! Logical combinators: `not`, `and`, `or` and `optional`.

use std::sync::Arc;

use sift_value::Value;

use crate::evaluator::match_pattern;
use crate::keys::{selection_shape, SelectionShape};
use crate::matcher::{MatchResult, Matcher};
use crate::pattern::Pattern;
use crate::selection::{SelectionKey, Selections};

/// Matches when the inner pattern does not. Selections inside are dropped.
#[derive(Clone, Debug)]
pub struct Not {
    inner: Box<Pattern>,
}

impl Not {
    pub fn new(inner: Pattern) -> Self {
        Not {
            inner: Box::new(inner),
        }
    }
}

impl Matcher for Not {
    fn name(&self) -> &'static str {
        "not"
    }

    fn probe(&self, value: &Value) -> MatchResult {
        let mut discarded = Selections::new();
        MatchResult::from_bool(!match_pattern(&self.inner, value, &mut discarded))
    }
}

/// Matches when every sub-pattern matches.
///
/// Selections accumulate in declaration order; a key bound twice keeps the
/// last value.
#[derive(Clone, Debug)]
pub struct And {
    patterns: Vec<Pattern>,
}

impl And {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        And { patterns }
    }
}

impl Matcher for And {
    fn name(&self) -> &'static str {
        "and"
    }

    fn probe(&self, value: &Value) -> MatchResult {
        let mut selections = Selections::new();
        for pattern in &self.patterns {
            if !match_pattern(pattern, value, &mut selections) {
                return MatchResult::failure();
            }
        }
        MatchResult::success(selections)
    }

    fn selection_shape(&self) -> SelectionShape {
        self.patterns
            .iter()
            .fold(SelectionShape::empty(), |shape, pattern| {
                shape.then(selection_shape(pattern))
            })
    }
}

/// Matches when any sub-pattern matches, trying them in order.
///
/// Only the first matching branch selects. Keys declared by the other
/// branches are bound to `Undefined`, so the selection shape does not
/// depend on which branch won.
#[derive(Clone, Debug)]
pub struct Or {
    patterns: Vec<Pattern>,
    keys: Arc<[SelectionKey]>,
}

impl Or {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        let keys = alternatives(&patterns).keys().into();
        Or { patterns, keys }
    }
}

fn alternatives(patterns: &[Pattern]) -> SelectionShape {
    patterns
        .iter()
        .map(selection_shape)
        .reduce(SelectionShape::either)
        .unwrap_or_default()
}

impl Matcher for Or {
    fn name(&self) -> &'static str {
        "or"
    }

    fn probe(&self, value: &Value) -> MatchResult {
        for pattern in &self.patterns {
            let mut branch = Selections::new();
            if match_pattern(pattern, value, &mut branch) {
                let mut selections = Selections::undefined_for(&self.keys);
                selections.extend(branch);
                return MatchResult::success(selections);
            }
        }
        MatchResult::failure()
    }

    fn selection_shape(&self) -> SelectionShape {
        alternatives(&self.patterns)
    }
}

/// Matches `Undefined`, or whatever the inner pattern matches.
///
/// On `Undefined` the inner pattern is not run and its keys are bound to
/// `Undefined`.
#[derive(Clone, Debug)]
pub struct Optional {
    inner: Box<Pattern>,
    keys: Arc<[SelectionKey]>,
}

impl Optional {
    pub fn new(inner: Pattern) -> Self {
        let keys = selection_shape(&inner).keys().into();
        Optional {
            inner: Box::new(inner),
            keys,
        }
    }
}

impl Matcher for Optional {
    fn name(&self) -> &'static str {
        "optional"
    }

    fn probe(&self, value: &Value) -> MatchResult {
        if value.is_undefined() {
            return MatchResult::success(Selections::undefined_for(&self.keys));
        }
        let mut selections = Selections::new();
        let matched = match_pattern(&self.inner, value, &mut selections);
        MatchResult::with_selections(matched, selections)
    }

    fn selection_shape(&self) -> SelectionShape {
        selection_shape(&self.inner)
    }

    fn is_optional(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests;
