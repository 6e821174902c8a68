//! Collection combinators: every element of a sequence, set or map must
//! match an element pattern.
//!
//! Selections made by the element pattern are gathered into one list per
//! key, in element order. An empty collection still binds every declared
//! key, to an empty list.

use std::sync::Arc;

use sift_value::Value;

use crate::evaluator::match_pattern;
use crate::keys::{selection_shape, SelectionShape};
use crate::matcher::{MatchResult, Matcher};
use crate::pattern::Pattern;
use crate::selection::{SelectionKey, SelectionLists, Selections};

/// Match `element` against each item, collecting selections into lists.
pub(crate) fn probe_elements<'v>(
    element: &Pattern,
    keys: &[SelectionKey],
    items: impl IntoIterator<Item = &'v Value>,
) -> MatchResult {
    let mut lists = SelectionLists::seeded(keys);
    for item in items {
        let mut selections = Selections::new();
        if !match_pattern(element, item, &mut selections) {
            return MatchResult::failure();
        }
        lists.push(selections);
    }
    MatchResult::success(lists.finish())
}

fn element_keys(element: Option<&Pattern>) -> Arc<[SelectionKey]> {
    element
        .map(|pattern| selection_shape(pattern).keys().into())
        .unwrap_or_else(|| Arc::from(Vec::new()))
}

fn element_shape(element: Option<&Pattern>) -> SelectionShape {
    element.map_or_else(SelectionShape::empty, selection_shape)
}

/// Sequence whose items all match an element pattern.
#[derive(Clone, Debug)]
pub struct ArrayOf {
    element: Option<Box<Pattern>>,
    keys: Arc<[SelectionKey]>,
}

impl ArrayOf {
    /// `None` accepts any items.
    pub fn new(element: Option<Pattern>) -> Self {
        ArrayOf {
            keys: element_keys(element.as_ref()),
            element: element.map(Box::new),
        }
    }

    pub(crate) fn probe_items(&self, items: &[Value]) -> MatchResult {
        match self.element.as_deref() {
            Some(element) => probe_elements(element, &self.keys, items),
            None => MatchResult::from_bool(true),
        }
    }
}

impl Matcher for ArrayOf {
    fn name(&self) -> &'static str {
        "array"
    }

    fn probe(&self, value: &Value) -> MatchResult {
        match value.as_list() {
            Some(items) => self.probe_items(items),
            None => MatchResult::failure(),
        }
    }

    fn selection_shape(&self) -> SelectionShape {
        element_shape(self.element.as_deref())
    }
}

/// Set whose members all match an element pattern.
#[derive(Clone, Debug)]
pub struct SetOf {
    element: Option<Box<Pattern>>,
    keys: Arc<[SelectionKey]>,
}

impl SetOf {
    /// `None` accepts any members.
    pub fn new(element: Option<Pattern>) -> Self {
        SetOf {
            keys: element_keys(element.as_ref()),
            element: element.map(Box::new),
        }
    }
}

impl Matcher for SetOf {
    fn name(&self) -> &'static str {
        "set"
    }

    fn probe(&self, value: &Value) -> MatchResult {
        let Some(set) = value.as_set() else {
            return MatchResult::failure();
        };
        match self.element.as_deref() {
            Some(element) => probe_elements(element, &self.keys, set.iter()),
            None => MatchResult::from_bool(true),
        }
    }

    fn selection_shape(&self) -> SelectionShape {
        element_shape(self.element.as_deref())
    }
}

/// Map whose keys and values all match their patterns.
#[derive(Clone, Debug)]
pub struct MapOf {
    key: Option<Box<Pattern>>,
    value: Option<Box<Pattern>>,
    keys: Arc<[SelectionKey]>,
}

impl MapOf {
    /// `None` on either side accepts anything there.
    pub fn new(key: Option<Pattern>, value: Option<Pattern>) -> Self {
        let shape = element_shape(key.as_ref()).then(element_shape(value.as_ref()));
        MapOf {
            key: key.map(Box::new),
            value: value.map(Box::new),
            keys: shape.keys().into(),
        }
    }

    fn entry_matches(&self, key: &Value, value: &Value, selections: &mut Selections) -> bool {
        let key_ok = self
            .key
            .as_deref()
            .map_or(true, |pattern| match_pattern(pattern, key, selections));
        key_ok
            && self
                .value
                .as_deref()
                .map_or(true, |pattern| match_pattern(pattern, value, selections))
    }
}

impl Matcher for MapOf {
    fn name(&self) -> &'static str {
        "map"
    }

    fn probe(&self, value: &Value) -> MatchResult {
        let Some(map) = value.as_map() else {
            return MatchResult::failure();
        };
        let mut lists = SelectionLists::seeded(&self.keys);
        for (key, entry) in map.iter() {
            let mut selections = Selections::new();
            if !self.entry_matches(key, entry, &mut selections) {
                return MatchResult::failure();
            }
            lists.push(selections);
        }
        MatchResult::success(lists.finish())
    }

    fn selection_shape(&self) -> SelectionShape {
        element_shape(self.key.as_deref()).then(element_shape(self.value.as_deref()))
    }
}

#[cfg(test)]
mod tests;
