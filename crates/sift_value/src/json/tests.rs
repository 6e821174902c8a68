#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn renders_records_compactly() {
    let value = Value::record([
        ("status", Value::from("success")),
        ("count", Value::from(2)),
        ("ratio", Value::from(0.5)),
    ]);
    assert_eq!(
        to_json_string(&value).unwrap(),
        r#"{"status":"success","count":2,"ratio":0.5}"#
    );
}

#[test]
fn integral_numbers_have_no_fraction() {
    assert_eq!(to_json_string(&Value::from(3)).unwrap(), "3");
    assert_eq!(to_json_string(&Value::Number(-0.0)).unwrap(), "0");
    assert_eq!(to_json_string(&Value::Number(f64::NAN)).unwrap(), "null");
}

#[test]
fn undefined_is_omitted_from_records_and_null_in_lists() {
    let value = Value::record([
        ("a", Value::Undefined),
        ("b", Value::list(vec![Value::Undefined, Value::from(1)])),
    ]);
    assert_eq!(to_json_string(&value).unwrap(), r#"{"b":[null,1]}"#);
}

#[test]
fn maps_and_sets_render_empty() {
    let value = Value::list(vec![
        Value::map([(Value::from("k"), Value::from(1))]),
        Value::set([Value::from(1)]),
    ]);
    assert_eq!(to_json_string(&value).unwrap(), "[{},{}]");
}

#[test]
fn opaque_objects_render_their_fields() {
    let value = Value::object("Point", [("x", Value::from(1)), ("y", Value::from(2))]);
    assert_eq!(to_json_string(&value).unwrap(), r#"{"x":1,"y":2}"#);
}

#[test]
fn bigint_fails_anywhere() {
    assert!(to_json_string(&Value::bigint(1)).is_err());
    let nested = Value::record([("id", Value::bigint(10))]);
    assert!(to_json_string(&nested).is_err());
}

#[test]
fn top_level_undefined_and_symbol_fail() {
    assert!(to_json_string(&Value::Undefined).is_err());
    assert!(to_json_string(&Value::symbol(Some("s"))).is_err());
}
