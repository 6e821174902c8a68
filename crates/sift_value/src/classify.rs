//! Value classification.
//!
//! Every structural rule in the evaluator starts by asking which shape a
//! candidate value has. `ValueKind` is that answer.

use std::fmt;

use crate::Value;

/// Kind of a primitive value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
    BigInt,
    Symbol,
    Null,
    Undefined,
}

impl PrimitiveKind {
    /// `true` for `Null` and `Undefined`.
    pub fn is_nullish(self) -> bool {
        matches!(self, PrimitiveKind::Null | PrimitiveKind::Undefined)
    }

    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::BigInt => "bigint",
            PrimitiveKind::Symbol => "symbol",
            PrimitiveKind::Null => "null",
            PrimitiveKind::Undefined => "undefined",
        }
    }
}

/// Structural category of a runtime value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Primitive(PrimitiveKind),
    /// Ordered sequence.
    Sequence,
    /// Associative map.
    Map,
    /// Membership set.
    Set,
    /// Plain keyed record.
    Record,
    /// Opaque class instance.
    Opaque,
}

impl ValueKind {
    pub fn is_primitive(self) -> bool {
        matches!(self, ValueKind::Primitive(_))
    }

    pub fn is_nullish(self) -> bool {
        matches!(self, ValueKind::Primitive(kind) if kind.is_nullish())
    }

    /// Whether values of this kind expose named fields.
    pub fn has_fields(self) -> bool {
        matches!(self, ValueKind::Record | ValueKind::Opaque)
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Primitive(kind) => kind.name(),
            ValueKind::Sequence => "sequence",
            ValueKind::Map => "map",
            ValueKind::Set => "set",
            ValueKind::Record => "record",
            ValueKind::Opaque => "opaque",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Classify this value. Pure and total.
    pub fn classify(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Primitive(PrimitiveKind::Undefined),
            Value::Null => ValueKind::Primitive(PrimitiveKind::Null),
            Value::Bool(_) => ValueKind::Primitive(PrimitiveKind::Boolean),
            Value::Number(_) => ValueKind::Primitive(PrimitiveKind::Number),
            Value::BigInt(_) => ValueKind::Primitive(PrimitiveKind::BigInt),
            Value::Symbol(_) => ValueKind::Primitive(PrimitiveKind::Symbol),
            Value::Str(_) => ValueKind::Primitive(PrimitiveKind::String),
            Value::List(_) => ValueKind::Sequence,
            Value::Record(_) => ValueKind::Record,
            Value::Map(_) => ValueKind::Map,
            Value::Set(_) => ValueKind::Set,
            Value::Object(_) => ValueKind::Opaque,
        }
    }
}
