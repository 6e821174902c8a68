//! Selection keys and the per-call selection accumulator.
//!
//! A `Selections` value is created fresh for each top-level evaluation and
//! threaded through the recursive matcher by `&mut`. It is never shared
//! between calls, which is what makes nested matches reentrant.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

use sift_value::Value;

/// Key under which a selected sub-value is recorded.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SelectionKey {
    /// The single unnamed selection of a pattern (`p::select()`).
    Anonymous,
    /// A caller-named selection (`p::select_as("name")`).
    Named(Arc<str>),
}

impl SelectionKey {
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        SelectionKey::Named(name.into())
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, SelectionKey::Anonymous)
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            SelectionKey::Anonymous => None,
            SelectionKey::Named(name) => Some(&**name),
        }
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionKey::Anonymous => f.write_str("<anonymous>"),
            SelectionKey::Named(name) => f.write_str(name),
        }
    }
}

impl From<&str> for SelectionKey {
    fn from(name: &str) -> Self {
        SelectionKey::named(name)
    }
}

/// Ordered key to value mapping collected during one evaluation.
///
/// Keys keep the position of their first insertion; inserting an existing
/// key overwrites its value in place.
#[derive(Clone, Debug, Default)]
pub struct Selections {
    entries: Vec<(SelectionKey, Value)>,
    index: FxHashMap<SelectionKey, usize>,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every key bound to `Undefined`.
    pub(crate) fn undefined_for(keys: &[SelectionKey]) -> Self {
        keys.iter()
            .map(|key| (key.clone(), Value::Undefined))
            .collect()
    }

    /// Record `value` under `key`, overwriting any earlier value.
    pub fn insert(&mut self, key: SelectionKey, value: Value) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 = value;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }
    }

    /// Replay every entry of `other` in its order.
    pub fn extend(&mut self, other: Selections) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    pub fn get_key(&self, key: &SelectionKey) -> Option<&Value> {
        let slot = *self.index.get(key)?;
        self.entries.get(slot).map(|(_, value)| value)
    }

    /// Value of a named selection.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.get_key(&SelectionKey::named(name))
    }

    /// Value of the anonymous selection.
    pub fn anonymous(&self) -> Option<&Value> {
        self.get_key(&SelectionKey::Anonymous)
    }

    pub fn contains_key(&self, key: &SelectionKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SelectionKey, &Value)> + '_ {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &SelectionKey> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Collapse into a record value, one field per key.
    pub fn into_record(self) -> Value {
        Value::record(
            self.entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value)),
        )
    }

    /// Decide what a clause handler receives for this match.
    ///
    /// With no selections the handler gets the input itself; an anonymous
    /// selection is handed over bare; otherwise the named mapping.
    pub fn into_selected(self, input: &Value) -> Selected {
        if self.is_empty() {
            return Selected::Input(input.clone());
        }
        if let Some(value) = self.anonymous() {
            return Selected::Anonymous(value.clone());
        }
        Selected::Named(self)
    }
}

impl PartialEq for Selections {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl IntoIterator for Selections {
    type Item = (SelectionKey, Value);
    type IntoIter = std::vec::IntoIter<(SelectionKey, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<SelectionKey>> FromIterator<(K, Value)> for Selections {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut selections = Selections::new();
        for (key, value) in iter {
            selections.insert(key.into(), value);
        }
        selections
    }
}

/// Per-key lists of selections gathered across the elements of a collection.
#[derive(Debug, Default)]
pub(crate) struct SelectionLists {
    order: Vec<SelectionKey>,
    lists: FxHashMap<SelectionKey, Vec<Value>>,
}

impl SelectionLists {
    /// Start with an empty list for each key the element pattern declares.
    pub(crate) fn seeded(keys: &[SelectionKey]) -> Self {
        let mut lists = SelectionLists::default();
        for key in keys {
            lists.slot(key.clone());
        }
        lists
    }

    fn slot(&mut self, key: SelectionKey) -> &mut Vec<Value> {
        if !self.lists.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.lists.entry(key).or_default()
    }

    /// Append one element's selections.
    pub(crate) fn push(&mut self, selections: Selections) {
        for (key, value) in selections {
            self.slot(key).push(value);
        }
    }

    pub(crate) fn finish(mut self) -> Selections {
        let mut selections = Selections::new();
        for key in self.order {
            let items = self.lists.remove(&key).unwrap_or_default();
            selections.insert(key, Value::list(items));
        }
        selections
    }
}

/// What a clause handler receives.
#[derive(Clone, Debug, PartialEq)]
pub enum Selected {
    /// The pattern selected nothing; this is the matched input.
    Input(Value),
    /// The single anonymous selection.
    Anonymous(Value),
    /// All named selections.
    Named(Selections),
}

impl Selected {
    /// The bare value for `Input` and `Anonymous`.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Selected::Input(value) | Selected::Anonymous(value) => Some(value),
            Selected::Named(_) => None,
        }
    }

    /// A named selection.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Selected::Named(selections) => selections.get(name),
            Selected::Input(_) | Selected::Anonymous(_) => None,
        }
    }

    /// Collapse into a single value; named selections become a record.
    pub fn into_value(self) -> Value {
        match self {
            Selected::Input(value) | Selected::Anonymous(value) => value,
            Selected::Named(selections) => selections.into_record(),
        }
    }
}
