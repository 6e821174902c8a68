//! Sift Value - runtime data model for the sift matching engine.
//!
//! This crate provides:
//! - Loosely-typed runtime values (`Value`, `RecordValue`, `MapValue`, ...)
//! - The value classifier (`Value::classify`, `ValueKind`)
//! - JSON-style rendering (`to_json_string`)
//!
//! Values are immutable. Heap payloads are shared through `Heap<T>` (an
//! `Arc` wrapper) and can only be created through `Value::` factory methods,
//! so cloning a value never copies its contents.

mod classify;
mod json;
mod value;

pub use classify::{PrimitiveKind, ValueKind};
pub use json::to_json_string;
pub use value::{Heap, MapValue, ObjectValue, RecordLayout, RecordValue, SetValue, Symbol, Value};
