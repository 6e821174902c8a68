#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::evaluator::evaluate;
use crate::{p, record};
use pretty_assertions::assert_eq;

fn list(items: Vec<Value>) -> Value {
    Value::list(items)
}

#[test]
fn array_checks_every_item() {
    let pattern = p::array_of(p::number());
    assert!(evaluate(&pattern, &list(vec![Value::from(1), Value::from(2)])).matched);
    assert!(!evaluate(&pattern, &list(vec![Value::from(1), Value::from("2")])).matched);
    assert!(evaluate(&pattern, &list(vec![])).matched);
    assert!(!evaluate(&pattern, &Value::set([Value::from(1)])).matched);
}

#[test]
fn array_collects_selections_into_lists() {
    let pattern = p::array_of(record! {
        "name" => p::select_as("names"),
        "id" => p::select_as("ids"),
    });
    let value = list(vec![
        Value::record([("name", Value::from("a")), ("id", Value::from(1))]),
        Value::record([("name", Value::from("b")), ("id", Value::from(2))]),
    ]);
    let selections = evaluate(&pattern, &value).selections.unwrap();
    assert_eq!(
        selections.get("names"),
        Some(&list(vec![Value::from("a"), Value::from("b")]))
    );
    assert_eq!(
        selections.get("ids"),
        Some(&list(vec![Value::from(1), Value::from(2)]))
    );
}

#[test]
fn empty_array_binds_empty_lists() {
    let pattern = p::array_of(p::select());
    let selections = evaluate(&pattern, &list(vec![])).selections.unwrap();
    assert_eq!(selections.anonymous(), Some(&list(vec![])));
}

#[test]
fn untyped_array_accepts_any_items() {
    let pattern = p::array();
    assert!(evaluate(&pattern, &list(vec![Value::Null, Value::from("x")])).matched);
    assert!(!evaluate(&pattern, &Value::from("x")).matched);
}

#[test]
fn set_checks_every_member() {
    let pattern = p::set_of(p::string().select());
    let value = Value::set([Value::from("a"), Value::from("b")]);
    let selections = evaluate(&pattern, &value).selections.unwrap();
    assert_eq!(
        selections.anonymous(),
        Some(&list(vec![Value::from("a"), Value::from("b")]))
    );
    assert!(!evaluate(&pattern, &Value::set([Value::from(1)])).matched);
    assert!(evaluate(&p::set(), &Value::set([])).matched);
    assert!(!evaluate(&p::set(), &list(vec![])).matched);
}

#[test]
fn map_checks_keys_and_values() {
    let pattern = p::map_of(p::string(), p::number());
    let good = Value::map([
        (Value::from("a"), Value::from(1)),
        (Value::from("b"), Value::from(2)),
    ]);
    let bad_value = Value::map([(Value::from("a"), Value::from("1"))]);
    let bad_key = Value::map([(Value::from(1), Value::from(1))]);
    assert!(evaluate(&pattern, &good).matched);
    assert!(!evaluate(&pattern, &bad_value).matched);
    assert!(!evaluate(&pattern, &bad_key).matched);
    assert!(evaluate(&p::map(), &Value::map([])).matched);
    assert!(!evaluate(&p::map(), &Value::record([("a", Value::from(1))])).matched);
}

#[test]
fn map_selects_keys_and_values() {
    let pattern = p::map_of(p::select_as("k"), p::select_as("v"));
    let value = Value::map([
        (Value::from("a"), Value::from(1)),
        (Value::from("b"), Value::from(2)),
    ]);
    let selections = evaluate(&pattern, &value).selections.unwrap();
    assert_eq!(
        selections.get("k"),
        Some(&list(vec![Value::from("a"), Value::from("b")]))
    );
    assert_eq!(
        selections.get("v"),
        Some(&list(vec![Value::from(1), Value::from(2)]))
    );
}
