#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::evaluator::evaluate;
use crate::{p, record};
use pretty_assertions::assert_eq;

fn selections_of(pattern: &Pattern, value: &Value) -> Selections {
    let result = evaluate(pattern, value);
    assert!(result.matched, "expected {value} to match");
    result.selections.unwrap_or_default()
}

#[test]
fn not_inverts_and_discards_selections() {
    let pattern = p::not(p::select_as("x"));
    assert!(!evaluate(&pattern, &Value::from(5)).matched);

    let pattern = p::not(record! { "a" => p::select_as("x") });
    assert!(selections_of(&pattern, &Value::from(5)).is_empty());
}

#[test]
fn and_requires_every_pattern() {
    let pattern = p::intersection([
        Pattern::from(p::number()),
        p::when(|v| v.as_number() > Some(2.0)),
    ]);
    assert!(evaluate(&pattern, &Value::from(3)).matched);
    assert!(!evaluate(&pattern, &Value::from(1)).matched);
    assert!(!evaluate(&pattern, &Value::from("3")).matched);
}

#[test]
fn and_merges_selections_last_wins() {
    let pattern = p::intersection([
        record! { "a" => p::select_as("x") },
        record! { "b" => p::select_as("y") },
        record! { "b" => p::select_as("x") },
    ]);
    let value = Value::record([("a", Value::from(1)), ("b", Value::from(2))]);
    let selections = selections_of(&pattern, &value);
    let pairs: Vec<(String, Value)> = selections
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("x".to_string(), Value::from(2)),
            ("y".to_string(), Value::from(2)),
        ]
    );
}

#[test]
fn or_takes_first_matching_branch() {
    let pattern = p::union([
        record! { "n" => p::number().select_as("v") },
        record! { "n" => p::any().select_as("v") },
    ]);
    let value = Value::record([("n", Value::from(7))]);
    assert_eq!(selections_of(&pattern, &value).get("v"), Some(&Value::from(7)));
    assert!(!evaluate(&pattern, &Value::from(7)).matched);
}

#[test]
fn or_binds_missing_branch_keys_to_undefined() {
    let pattern = p::union([
        record! { "type" => "a", "val" => p::select() },
        record! { "type" => "b" },
    ]);
    let value = Value::record([("type", Value::from("b"))]);
    let selections = selections_of(&pattern, &value);
    assert_eq!(selections.len(), 1);
    assert_eq!(selections.anonymous(), Some(&Value::Undefined));

    let pattern = p::union([
        record! { "a" => p::select_as("x") },
        record! { "b" => p::select_as("y") },
    ]);
    let value = Value::record([("b", Value::from(2))]);
    let selections = selections_of(&pattern, &value);
    assert_eq!(selections.get("x"), Some(&Value::Undefined));
    assert_eq!(selections.get("y"), Some(&Value::from(2)));
}

#[test]
fn or_without_branches_never_matches() {
    let pattern = p::union(Vec::<Pattern>::new());
    assert!(!evaluate(&pattern, &Value::Null).matched);
}

#[test]
fn optional_accepts_undefined_and_seeds_keys() {
    let pattern = p::optional(record! { "id" => p::select_as("id") });
    let selections = selections_of(&pattern, &Value::Undefined);
    assert_eq!(selections.get("id"), Some(&Value::Undefined));

    let value = Value::record([("id", Value::from(9))]);
    assert_eq!(selections_of(&pattern, &value).get("id"), Some(&Value::from(9)));

    assert!(!evaluate(&pattern, &Value::Null).matched);
}

#[test]
fn optional_reports_its_keys() {
    let optional = Optional::new(p::select_as("x"));
    assert_eq!(optional.selection_shape().keys(), &[SelectionKey::named("x")]);
    assert!(optional.is_optional());
}
