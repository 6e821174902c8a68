//! Composite value payloads: records, maps, sets, opaque objects and symbols.
//!
//! All of these are immutable after construction and share their storage
//! through `Arc`, so cloning a composite is a reference-count bump.

use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::Value;

// RecordLayout

/// Field layout shared by records with O(1) field access.
#[derive(Clone, Debug, Default)]
pub struct RecordLayout {
    /// Field names in insertion order.
    names: Vec<Arc<str>>,
    /// Map from field name to index.
    field_indices: FxHashMap<Arc<str>, usize>,
}

impl RecordLayout {
    /// Get the index of a field by name.
    pub fn get_index(&self, field: &str) -> Option<usize> {
        self.field_indices.get(field).copied()
    }

    /// Field names in insertion order.
    pub fn names(&self) -> &[Arc<str>] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// RecordValue

/// Plain keyed record (a parsed JSON object, a discriminated record, ...).
///
/// Field order is insertion order. A key given twice keeps its first
/// position and its last value.
#[derive(Clone, Default)]
pub struct RecordValue {
    layout: Arc<RecordLayout>,
    fields: Arc<Vec<Value>>,
}

impl RecordValue {
    pub fn new<K, I>(entries: I) -> Self
    where
        K: Into<Arc<str>>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut layout = RecordLayout::default();
        let mut fields = Vec::new();
        for (name, value) in entries {
            let name: Arc<str> = name.into();
            if let Some(&index) = layout.field_indices.get(&name) {
                fields[index] = value;
            } else {
                layout.field_indices.insert(Arc::clone(&name), fields.len());
                layout.names.push(name);
                fields.push(value);
            }
        }
        RecordValue {
            layout: Arc::new(layout),
            fields: Arc::new(fields),
        }
    }

    /// Get a field value by name with O(1) lookup.
    pub fn get(&self, field: &str) -> Option<&Value> {
        let index = self.layout.get_index(field)?;
        self.fields.get(index)
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.layout.get_index(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn layout(&self) -> &RecordLayout {
        &self.layout
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.layout
            .names
            .iter()
            .map(|name| &**name)
            .zip(self.fields.iter())
    }
}

impl PartialEq for RecordValue {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.fields, &other.fields) {
            return true;
        }
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, value)| other.get(name).is_some_and(|o| o == value))
    }
}

impl Eq for RecordValue {}

impl Hash for RecordValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        // Equality ignores field order, so hash in key order
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        for (name, value) in entries {
            name.hash(state);
            value.hash(state);
        }
    }
}

impl fmt::Debug for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// MapValue

/// Associative map keyed by arbitrary values, in insertion order.
///
/// Keys are compared with SameValueZero semantics.
#[derive(Clone, Default)]
pub struct MapValue {
    entries: Vec<(Value, Value)>,
    lookup: FxHashMap<Value, usize>,
}

impl MapValue {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Value, Value)>,
    {
        let mut map = MapValue::default();
        for (key, value) in entries {
            if let Some(&index) = map.lookup.get(&key) {
                map.entries[index].1 = value;
            } else {
                map.lookup.insert(key.clone(), map.entries.len());
                map.entries.push((key, value));
            }
        }
        map
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        let index = *self.lookup.get(key)?;
        self.entries.get(index).map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.lookup.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> + '_ {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl PartialEq for MapValue {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|o| o == value))
    }
}

impl Eq for MapValue {}

impl Hash for MapValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Entry order is not part of equality; the length is a valid summary
        self.len().hash(state);
    }
}

impl fmt::Debug for MapValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// SetValue

/// Membership set of values in insertion order, without duplicates.
#[derive(Clone, Default)]
pub struct SetValue {
    items: Vec<Value>,
    lookup: FxHashMap<Value, usize>,
}

impl SetValue {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut set = SetValue::default();
        for item in items {
            if !set.lookup.contains_key(&item) {
                set.lookup.insert(item.clone(), set.items.len());
                set.items.push(item);
            }
        }
        set
    }

    pub fn contains(&self, item: &Value) -> bool {
        self.lookup.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl PartialEq for SetValue {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl Eq for SetValue {}

impl Hash for SetValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
    }
}

impl fmt::Debug for SetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// ObjectValue

/// Opaque class instance: a class lineage plus its visible fields.
///
/// The lineage lists the most-derived class first, then its ancestors.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ObjectValue {
    lineage: Arc<[Arc<str>]>,
    fields: RecordValue,
}

impl ObjectValue {
    /// Create an instance of a class with no ancestors.
    pub fn new(class: impl Into<Arc<str>>, fields: RecordValue) -> Self {
        ObjectValue {
            lineage: Arc::from(vec![class.into()]),
            fields,
        }
    }

    /// Create an instance given its full lineage, most-derived class first.
    ///
    /// An empty lineage is treated as a bare `Object`.
    pub fn with_lineage<C, I>(lineage: I, fields: RecordValue) -> Self
    where
        C: Into<Arc<str>>,
        I: IntoIterator<Item = C>,
    {
        let mut classes: Vec<Arc<str>> = lineage.into_iter().map(Into::into).collect();
        if classes.is_empty() {
            classes.push(Arc::from("Object"));
        }
        ObjectValue {
            lineage: Arc::from(classes),
            fields,
        }
    }

    /// The most-derived class name.
    pub fn class_name(&self) -> &str {
        self.lineage.first().map_or("Object", |name| &**name)
    }

    /// Whether `class` appears anywhere in the lineage.
    pub fn is_instance_of(&self, class: &str) -> bool {
        self.lineage.iter().any(|name| &**name == class)
    }

    pub fn lineage(&self) -> impl Iterator<Item = &str> + '_ {
        self.lineage.iter().map(|name| &**name)
    }

    pub fn fields(&self) -> &RecordValue {
        &self.fields
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.class_name(), self.fields)
    }
}

// Symbol

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

/// Unique, identity-compared primitive.
///
/// Every call to `Symbol::new` yields a symbol distinct from all others,
/// even when the descriptions are equal.
#[derive(Clone)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    pub fn new(description: Option<&str>) -> Self {
        Symbol {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: description.map(Arc::from),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol#{}({})", self.id, self.description().unwrap_or(""))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests;
