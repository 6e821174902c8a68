//! Runtime values matched by the engine.
//!
//! # Heap Enforcement
//!
//! Heap payloads are wrapped in `Heap<T>`, whose constructor is private to
//! this crate. External code builds composite values through the `Value::`
//! factory methods:
//!
//! ```text
//! let s = Value::string("hello");                           // OK
//! let list = Value::list(vec![Value::from(1), Value::Null]); // OK
//! let rec = Value::record([("type", Value::from("a"))]);    // OK
//! ```
//!
//! # Equality
//!
//! `PartialEq`/`Hash` are structural and use SameValueZero for numbers
//! (`NaN == NaN`, `0 == -0`). Records, maps and sets compare without regard
//! to insertion order. Literal pattern matching uses the stricter
//! [`Value::same_value`].

mod composite;
mod heap;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

pub use composite::{MapValue, ObjectValue, RecordLayout, RecordValue, SetValue, Symbol};
pub use heap::Heap;

/// A loosely-typed runtime value.
#[derive(Clone)]
pub enum Value {
    // Primitives (inline, no heap allocation)
    /// Absent value.
    Undefined,
    /// Explicit null.
    Null,
    Bool(bool),
    /// Double-precision number.
    Number(f64),
    /// Arbitrary-size integer, bounded to `i128`.
    BigInt(i128),
    /// Identity-compared symbol.
    Symbol(Symbol),

    // Heap Types
    Str(Heap<String>),
    /// Ordered sequence.
    List(Heap<Vec<Value>>),
    /// Plain keyed record.
    Record(RecordValue),
    /// Associative map with value keys.
    Map(Heap<MapValue>),
    /// Membership set.
    Set(Heap<SetValue>),
    /// Opaque class instance.
    Object(ObjectValue),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a number value.
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Create a bigint value.
    #[inline]
    pub fn bigint(n: i128) -> Self {
        Value::BigInt(n)
    }

    /// Create a fresh, unique symbol.
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Symbol::new(description))
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a record from `(name, value)` pairs.
    ///
    /// ```text
    /// let user = Value::record([("name", Value::from("ada")), ("age", Value::from(36))]);
    /// ```
    pub fn record<K, I>(entries: I) -> Self
    where
        K: Into<Arc<str>>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Record(RecordValue::new(entries))
    }

    /// Create a map from `(key, value)` pairs.
    pub fn map<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Value, Value)>,
    {
        Value::Map(Heap::new(MapValue::new(entries)))
    }

    /// Create a set; duplicate members are dropped.
    pub fn set<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Set(Heap::new(SetValue::new(items)))
    }

    /// Create an opaque instance of `class`.
    pub fn object<K, I>(class: impl Into<Arc<str>>, fields: I) -> Self
    where
        K: Into<Arc<str>>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(ObjectValue::new(class, RecordValue::new(fields)))
    }
}

// Accessors

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bigint(&self) -> Option<i128> {
        match self {
            Value::BigInt(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&RecordValue> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Value::Map(map) => Some(&**map),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&SetValue> {
        match self {
            Value::Set(set) => Some(&**set),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Keyed fields of a record or an opaque object.
    pub fn fields(&self) -> Option<&RecordValue> {
        match self {
            Value::Record(record) => Some(record),
            Value::Object(object) => Some(object.fields()),
            _ => None,
        }
    }

    /// Look up a field of a record or an opaque object.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields()?.get(field)
    }

    /// `true` for `Null` and `Undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Short type name used in messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::Symbol(_) => "symbol",
            Value::Str(_) => "string",
            Value::List(_) => "array",
            Value::Record(_) => "object",
            Value::Map(_) => "Map",
            Value::Set(_) => "Set",
            Value::Object(_) => "instance",
        }
    }
}

// Equality

impl Value {
    /// SameValue comparison: `NaN` equals `NaN`, `+0` differs from `-0`.
    ///
    /// Containers fall back to structural equality.
    pub fn same_value(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => {
                if a.is_nan() || b.is_nan() {
                    a.is_nan() && b.is_nan()
                } else {
                    a == b && a.is_sign_negative() == b.is_sign_negative()
                }
            }
            _ => self == other,
        }
    }

    /// SameValueZero comparison: `NaN` equals `NaN`, `+0` equals `-0`.
    #[inline]
    pub fn same_value_zero(&self, other: &Value) -> bool {
        self == other
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Value::Undefined | Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => normalized_bits(*n).hash(state),
            Value::BigInt(n) => n.hash(state),
            Value::Symbol(s) => s.hash(state),
            Value::Str(s) => s.hash(state),
            Value::List(items) => {
                for item in items.iter() {
                    item.hash(state);
                }
            }
            Value::Record(record) => record.hash(state),
            Value::Map(map) => map.hash(state),
            Value::Set(set) => set.hash(state),
            Value::Object(object) => object.hash(state),
        }
    }
}

/// Bit pattern under which SameValueZero-equal numbers hash identically.
fn normalized_bits(n: f64) -> u64 {
    if n.is_nan() {
        f64::NAN.to_bits()
    } else if n == 0.0 {
        0.0f64.to_bits()
    } else {
        n.to_bits()
    }
}

// Conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    #[expect(
        clippy::cast_precision_loss,
        reason = "numbers are doubles; integers beyond 2^53 round like any double"
    )]
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Undefined, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::string(s),
            serde_json::Value::Array(items) => {
                Value::list(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => {
                Value::record(fields.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}

// Formatting

/// Render a number the way a JavaScript engine prints it.
pub(crate) fn format_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        if n > 0.0 {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        }
    } else {
        write!(f, "{n}")
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => {
                write!(f, "Number(")?;
                format_number(*n, f)?;
                write!(f, ")")
            }
            Value::BigInt(n) => write!(f, "BigInt({n})"),
            Value::Symbol(s) => write!(f, "{s:?}"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Record(record) => write!(f, "Record({record:?})"),
            Value::Map(map) => write!(f, "Map({:?})", &**map),
            Value::Set(set) => write!(f, "Set({:?})", &**set),
            Value::Object(object) => write!(f, "Object({object:?})"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => format_number(*n, f),
            Value::BigInt(n) => write!(f, "{n}n"),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Record(record) => write_fields(f, record),
            Value::Map(map) => {
                write!(f, "Map {{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {k} => {v}")?;
                }
                write!(f, " }}")
            }
            Value::Set(set) => {
                write!(f, "Set {{")?;
                for (i, item) in set.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {item}")?;
                }
                write!(f, " }}")
            }
            Value::Object(object) => {
                write!(f, "{} ", object.class_name())?;
                write_fields(f, object.fields())
            }
        }
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, record: &RecordValue) -> fmt::Result {
    if record.is_empty() {
        return write!(f, "{{}}");
    }
    write!(f, "{{ ")?;
    for (i, (name, value)) in record.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{name}: {value}")?;
    }
    write!(f, " }}")
}
