use super::*;
use crate::evaluator::evaluate;
use crate::{collect_selection_keys, record};
use pretty_assertions::assert_eq;

#[test]
fn any_is_the_shared_catch_all() {
    for value in [Value::Undefined, Value::Null, Value::from(1), Value::list(vec![])] {
        assert!(is_matching(&ANY, &value));
        assert!(is_matching(&any(), &value));
    }
}

#[test]
fn primitive_wildcards() {
    assert!(is_matching(&boolean(), &Value::from(false)));
    assert!(!is_matching(&boolean(), &Value::from(0)));
    assert!(is_matching(&symbol(), &Value::symbol(None)));
    assert!(is_matching(&nullish(), &Value::Undefined));
    assert!(!is_matching(&non_nullable(), &Value::Null));
    assert!(is_matching(&Pattern::from(string()), &Value::from("")));
    assert!(is_matching(&Pattern::from(bigint()), &Value::bigint(0)));
    assert!(!is_matching(&Pattern::from(number()), &Value::number(f64::NAN)));
}

#[test]
fn instance_of_walks_the_lineage() {
    let error = Value::Object(sift_value::ObjectValue::with_lineage(
        ["NotFound", "HttpError", "Error"],
        sift_value::RecordValue::new([("status", Value::from(404))]),
    ));
    assert!(is_matching(&instance_of("NotFound"), &error));
    assert!(is_matching(&instance_of("Error"), &error));
    assert!(!is_matching(&instance_of("TypeError"), &error));
    let record = Value::record([("status", Value::from(1))]);
    assert!(!is_matching(&instance_of("Error"), &record));
}

#[test]
fn shape_never_selects() {
    let pattern = shape(record! { "id" => select_as("id") });
    assert!(collect_selection_keys(&pattern).is_empty());

    let result = evaluate(&pattern, &Value::record([("id", Value::from(1))]));
    assert!(result.matched);
    assert_eq!(result.selections, None);
}

#[test]
fn when_runs_the_predicate() {
    let short = when(|value| value.as_str().is_some_and(|s| s.len() < 3));
    assert!(is_matching(&short, &Value::from("ab")));
    assert!(!is_matching(&short, &Value::from("abc")));
}

#[test]
fn select_factories() {
    assert_eq!(collect_selection_keys(&select()), vec![SelectionKey::Anonymous]);
    assert_eq!(
        collect_selection_keys(&select_as("name")),
        vec![SelectionKey::named("name")]
    );
}
