use super::*;
use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;

#[test]
fn record_keeps_insertion_order() {
    let record = RecordValue::new([("b", Value::from(1)), ("a", Value::from(2))]);
    let names: Vec<_> = record.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(record.layout().get_index("a"), Some(1));
}

#[test]
fn record_duplicate_key_keeps_first_position_last_value() {
    let record = RecordValue::new([
        ("a", Value::from(1)),
        ("b", Value::from(2)),
        ("a", Value::from(3)),
    ]);
    assert_eq!(record.len(), 2);
    assert_eq!(record.get("a"), Some(&Value::from(3)));
    let names: Vec<_> = record.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn record_hash_ignores_field_order() {
    let a = Value::record([("x", Value::from(1)), ("y", Value::from(2))]);
    let b = Value::record([("y", Value::from(2)), ("x", Value::from(1))]);
    let mut seen = FxHashSet::default();
    seen.insert(a);
    assert!(seen.contains(&b));
}

#[test]
fn map_lookup_by_value_key() {
    let map = MapValue::new([
        (Value::from("k"), Value::from(1)),
        (Value::from(2), Value::from("two")),
        (Value::from("k"), Value::from(9)),
    ]);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&Value::from("k")), Some(&Value::from(9)));
    assert_eq!(map.get(&Value::from(2)), Some(&Value::from("two")));
    assert!(!map.contains_key(&Value::from("2")));
}

#[test]
fn map_keys_use_same_value_zero() {
    let map = MapValue::new([(Value::Number(0.0), Value::from("zero"))]);
    assert_eq!(map.get(&Value::Number(-0.0)), Some(&Value::from("zero")));
    let nan_map = MapValue::new([(Value::Number(f64::NAN), Value::Null)]);
    assert!(nan_map.contains_key(&Value::Number(f64::NAN)));
}

#[test]
fn set_drops_duplicates() {
    let set = SetValue::new([Value::from(1), Value::from(2), Value::from(1)]);
    assert_eq!(set.len(), 2);
    assert!(set.contains(&Value::from(2)));
    assert!(!set.contains(&Value::from(3)));
}

#[test]
fn set_equality_ignores_order() {
    let a = SetValue::new([Value::from("x"), Value::from("y")]);
    let b = SetValue::new([Value::from("y"), Value::from("x")]);
    assert_eq!(a, b);
}

#[test]
fn object_lineage() {
    let object = ObjectValue::with_lineage(["HttpError", "Error"], RecordValue::default());
    assert_eq!(object.class_name(), "HttpError");
    assert!(object.is_instance_of("Error"));
    assert!(!object.is_instance_of("TypeError"));

    let bare = ObjectValue::with_lineage(Vec::<&str>::new(), RecordValue::default());
    assert_eq!(bare.class_name(), "Object");
}

#[test]
fn symbol_display_uses_description() {
    let symbol = Symbol::new(Some("id"));
    assert_eq!(symbol.to_string(), "Symbol(id)");
    assert_eq!(symbol.description(), Some("id"));
    assert_eq!(Symbol::new(None).to_string(), "Symbol()");
}
