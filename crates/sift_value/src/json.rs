//! JSON-style rendering of values.
//!
//! Follows the rules of `JSON.stringify`: `undefined` and symbols vanish from
//! records and become `null` inside lists, maps and sets carry no
//! enumerable fields and render as `{}`, and bigints cannot be serialized at
//! all. A top-level `undefined` or symbol has no JSON form either.

use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::value::RecordValue;
use crate::Value;

/// Largest magnitude below which an integral double prints without a fraction.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serialize a value to a compact JSON string.
///
/// Fails for bigints anywhere in the value and for a top-level `undefined`
/// or symbol.
pub fn to_json_string(value: &Value) -> Result<String, serde_json::Error> {
    if matches!(value, Value::Undefined | Value::Symbol(_)) {
        return Err(serde_json::Error::custom(format!(
            "{} has no JSON representation",
            value.type_name()
        )));
    }
    serde_json::to_string(value)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null | Value::Symbol(_) => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::BigInt(_) => Err(S::Error::custom("do not know how to serialize a BigInt")),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Record(record) => serialize_fields(record, serializer),
            Value::Object(object) => serialize_fields(object.fields(), serializer),
            Value::Map(_) | Value::Set(_) => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "guarded: integral and within the exactly representable range"
)]
fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !n.is_finite() {
        serializer.serialize_unit()
    } else if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
        serializer.serialize_i64(n as i64)
    } else {
        serializer.serialize_f64(n)
    }
}

fn serialize_fields<S: Serializer>(record: &RecordValue, serializer: S) -> Result<S::Ok, S::Error> {
    let len = record.iter().filter(|(_, value)| is_visible(value)).count();
    let mut map = serializer.serialize_map(Some(len))?;
    for (name, value) in record.iter().filter(|(_, value)| is_visible(value)) {
        map.serialize_entry(name, value)?;
    }
    map.end()
}

/// Whether a record field survives serialization.
fn is_visible(value: &Value) -> bool {
    !matches!(value, Value::Undefined | Value::Symbol(_))
}

#[cfg(test)]
mod tests;
