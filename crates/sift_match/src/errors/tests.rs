use super::*;
use pretty_assertions::assert_eq;

#[test]
fn message_uses_json_rendering() {
    let err = NonExhaustiveError::new(Value::record([
        ("type", Value::from("a")),
        ("n", Value::from(1)),
    ]));
    assert_eq!(
        err.to_string(),
        r#"Pattern matching error: no pattern matches value {"type":"a","n":1}"#
    );
}

#[test]
fn message_falls_back_to_display() {
    let err = NonExhaustiveError::new(Value::bigint(12));
    assert_eq!(
        err.to_string(),
        "Pattern matching error: no pattern matches value 12n"
    );
    assert_eq!(err.input(), &Value::bigint(12));
}

#[test]
fn undefined_input_falls_back() {
    let err = NonExhaustiveError::new(Value::Undefined);
    assert_eq!(
        err.to_string(),
        "Pattern matching error: no pattern matches value undefined"
    );
}

#[test]
fn match_error_conversions() {
    let err: MatchError = NonExhaustiveError::new(Value::from(3)).into();
    assert!(err.is_non_exhaustive());
    assert_eq!(err.input(), Some(&Value::from(3)));

    let err: MatchError = PatternError::MixedSelections.into();
    assert!(!err.is_non_exhaustive());
    assert_eq!(err.input(), None);
    assert_eq!(
        err.to_string(),
        "invalid pattern: a pattern cannot mix anonymous and named selections"
    );
}

#[test]
fn duplicate_selection_names_key() {
    let err = PatternError::DuplicateSelection { key: Arc::from("id") };
    assert_eq!(
        err.to_string(),
        "selection `id` is declared more than once in the same branch"
    );
}
