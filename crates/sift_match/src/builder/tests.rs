#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::{p, record};
use pretty_assertions::assert_eq;
use std::cell::Cell;

#[test]
fn first_matching_clause_wins() {
    let result = match_value(2)
        .with(p::number(), |_, _| "number")
        .with(2, |_, _| "two")
        .run();
    assert_eq!(result, Ok("number"));
}

#[test]
fn clauses_are_tried_in_order() {
    let result = match_value("b")
        .with("a", |_, _| 1)
        .with("b", |_, _| 2)
        .with(p::string(), |_, _| 3)
        .run();
    assert_eq!(result, Ok(2));
}

#[test]
fn unmatched_input_is_reported() {
    let err = match_value(3)
        .with(1, |_, _| ())
        .with(2, |_, _| ())
        .run()
        .unwrap_err();
    assert!(err.is_non_exhaustive());
    assert_eq!(err.input(), Some(&Value::from(3)));
}

#[test]
fn empty_match_is_non_exhaustive() {
    let err = match_value::<()>(Value::Null).exhaustive().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Pattern matching error: no pattern matches value null"
    );
}

#[test]
fn handler_receives_input_without_selections() {
    let input = Value::record([("type", Value::from("ok")), ("n", Value::from(1))]);
    let selected = match_value(input.clone())
        .with(record! { "type" => "ok" }, |selected, _| selected)
        .run()
        .unwrap();
    assert_eq!(selected, Selected::Input(input));
}

#[test]
fn handler_receives_anonymous_selection() {
    let input = Value::record([("type", Value::from("ok")), ("data", Value::from(7))]);
    let selected = match_value(input)
        .with(record! { "type" => "ok", "data" => p::select() }, |selected, _| selected)
        .run()
        .unwrap();
    assert_eq!(selected, Selected::Anonymous(Value::from(7)));
}

#[test]
fn handler_receives_named_selections_and_input() {
    let input = Value::record([("x", Value::from(1)), ("y", Value::from(2))]);
    let (sum, seen) = match_value(input.clone())
        .with(
            record! { "x" => p::select_as("x"), "y" => p::select_as("y") },
            |selected, input| {
                let x = selected.get("x").and_then(Value::as_number).unwrap_or_default();
                let y = selected.get("y").and_then(Value::as_number).unwrap_or_default();
                (x + y, input.clone())
            },
        )
        .run()
        .unwrap();
    assert_eq!(sum, 3.0);
    assert_eq!(seen, input);
}

#[test]
fn guard_is_checked_after_the_pattern() {
    let calls = Cell::new(0);
    let result = match_value(5)
        .with_guard(
            p::number(),
            |value| {
                calls.set(calls.get() + 1);
                value.as_number() > Some(10.0)
            },
            |_, _| "big",
        )
        .with_guard("five", |_| unreachable!(), |_, _| "never")
        .with(p::number(), |_, _| "small")
        .run();
    assert_eq!(result, Ok("small"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn when_uses_only_the_predicate() {
    let result = match_value(Value::list(vec![]))
        .when(
            |value| value.as_list().is_some_and(<[Value]>::is_empty),
            |_, _| "empty",
        )
        .otherwise(|_, _| "other");
    assert_eq!(result, Ok("empty"));
}

#[test]
fn with_any_accepts_any_listed_pattern() {
    let classify = |value: Value| {
        match_value(value)
            .with_any([Pattern::from("a"), Pattern::from("b")], |_, _| "ab")
            .otherwise(|_, _| "other")
    };
    assert_eq!(classify(Value::from("b")), Ok("ab"));
    assert_eq!(classify(Value::from("c")), Ok("other"));
}

#[test]
fn otherwise_catches_everything() {
    let result = match_value(Value::Undefined)
        .with(1, |_, _| 1)
        .otherwise(|selected, _| match selected {
            Selected::Input(Value::Undefined) => 0,
            _ => -1,
        });
    assert_eq!(result, Ok(0));
}

#[test]
fn builders_are_persistent() {
    let base = match_value(2).with(1, |_, _| "one");
    let with_two = base.with(2, |_, _| "two");
    let with_number = base.with(p::number(), |_, _| "number");

    assert_eq!(base.len(), 1);
    assert_eq!(with_two.len(), 2);
    assert!(base.run().is_err());
    assert_eq!(with_two.run(), Ok("two"));
    assert_eq!(with_number.run(), Ok("number"));
    assert_eq!(base.clone().otherwise(|_, _| "fallback"), Ok("fallback"));
}

#[test]
fn invalid_pattern_poisons_every_terminal() {
    let called = Cell::new(false);
    let result = match_value(Value::record([("a", Value::from(1)), ("b", Value::from(2))]))
        .with(p::any(), |_, _| called.set(true))
        .with(record! { "a" => p::select(), "b" => p::select() }, |_, _| called.set(true))
        .otherwise(|_, _| called.set(true));
    assert_eq!(
        result,
        Err(MatchError::InvalidPattern(PatternError::MultipleAnonymousSelections))
    );
    assert!(!called.get());
}

#[test]
fn nested_matches_are_independent() {
    let input = Value::record([("inner", Value::from("x"))]);
    let result = match_value(input)
        .with(record! { "inner" => p::select_as("inner") }, |selected, _| {
            let inner = selected.get("inner").cloned().unwrap_or(Value::Undefined);
            match_value(inner)
                .with(p::string().select(), |value, _| value.into_value())
                .run()
        })
        .run();
    assert_eq!(result, Ok(Ok(Value::from("x"))));
}

#[test]
fn negative_zero_misses_a_zero_literal() {
    let result = match_value(-0.0).with(0, |_, _| "zero").run();
    assert!(matches!(result, Err(MatchError::NonExhaustive(_))));

    let result = match_value(-0.0).with(p::number(), |_, _| "number").run();
    assert_eq!(result, Ok("number"));
}

/// Records the name of every span opened while installed.
struct SpanNames(std::sync::Arc<std::sync::Mutex<Vec<&'static str>>>);

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for SpanNames {
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        self.0.lock().unwrap().push(attrs.metadata().name());
    }
}

#[test]
fn each_clause_attempt_opens_a_span() {
    use tracing_subscriber::prelude::*;

    let names = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(SpanNames(names.clone()));

    let result = tracing::subscriber::with_default(subscriber, || {
        match_value("b")
            .with("a", |_, _| 1)
            .with("b", |_, _| 2)
            .with(p::string(), |_, _| 3)
            .run()
    });
    assert_eq!(result, Ok(2));

    let names = names.lock().unwrap();
    assert_eq!(names.iter().filter(|&&name| name == "run").count(), 1);
    assert_eq!(names.iter().filter(|&&name| name == "clause").count(), 2);
}
