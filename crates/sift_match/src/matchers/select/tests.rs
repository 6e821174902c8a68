#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::evaluator::evaluate;
use crate::{p, record};
use pretty_assertions::assert_eq;

#[test]
fn bare_select_always_matches() {
    let select = Select::new(SelectionKey::Anonymous, None);
    let result = select.probe(&Value::Null);
    assert!(result.matched);
    assert_eq!(result.selections.unwrap().anonymous(), Some(&Value::Null));
}

#[test]
fn inner_pattern_must_match_first() {
    let pattern = p::string().select_as("s");
    assert!(!evaluate(&pattern, &Value::from(1)).matched);
    let result = evaluate(&pattern, &Value::from("x"));
    assert_eq!(result.selections.unwrap().get("s"), Some(&Value::from("x")));
}

#[test]
fn inner_selections_come_first() {
    let pattern = record! { "id" => p::select_as("id") }.select_as("user");
    let user = Value::record([("id", Value::from(3))]);
    let keys: Vec<String> = evaluate(&pattern, &user)
        .selections
        .unwrap()
        .keys()
        .map(ToString::to_string)
        .collect();
    assert_eq!(keys, vec!["id", "user"]);
}

#[test]
fn select_over_optional_stays_optional() {
    assert!(p::optional(p::string()).select_as("s").is_optional());
    assert!(!p::select_as("s").is_optional());
}

#[test]
fn key_accessor() {
    let select = Select::new(SelectionKey::named("k"), None);
    assert_eq!(select.key(), &SelectionKey::named("k"));
    assert_eq!(select.selection_shape().keys(), &[SelectionKey::named("k")]);
}
