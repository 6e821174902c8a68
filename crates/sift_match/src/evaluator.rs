//! The pattern evaluator.
//!
//! `match_pattern` walks a pattern and a value in lock-step. Rules, in
//! priority order:
//!
//! 1. A matcher node is probed through the [`Matcher`] protocol and its
//!    selections are replayed into the accumulator.
//! 2. A structural container first checks the value's classification, then
//!    recurses position by position or key by key.
//! 3. A literal is compared with SameValue.
//!
//! Selections are written to a caller-owned accumulator in depth-first,
//! left-to-right order; a key written twice keeps the last value.

use std::sync::Arc;

use sift_value::{SetValue, Value};

use crate::keys::collect_selection_keys;
use crate::matcher::{MatchResult, Matcher};
use crate::matchers::{probe_elements, ArrayOf};
use crate::pattern::Pattern;
use crate::selection::Selections;
use crate::stack::ensure_sufficient_stack;

/// Stand-in for an absent record field or map entry.
static UNDEFINED: Value = Value::Undefined;

/// Test `value` against `pattern`, appending selections to `selections`.
///
/// On failure the accumulator may hold partial selections; callers that
/// need a clean slate pass a fresh one per attempt.
pub fn match_pattern(pattern: &Pattern, value: &Value, selections: &mut Selections) -> bool {
    ensure_sufficient_stack(|| match pattern {
        Pattern::Matcher(node) => replay(node.probe(value), selections),
        Pattern::Record(fields) => match_record(fields, value, selections),
        Pattern::Tuple(items) => match value.as_list() {
            Some(values) => {
                values.len() == items.len() && match_positional(items, values, selections)
            }
            None => false,
        },
        Pattern::Variadic { head, rest, tail } => {
            match_variadic(head, rest, tail, value, selections)
        }
        Pattern::SetLiteral(members) => match value.as_set() {
            Some(set) => match_set(members, set, selections),
            None => false,
        },
        Pattern::MapLiteral(entries) => match value.as_map() {
            Some(map) => entries.iter().all(|(key, pattern)| {
                let entry = map.get(key).unwrap_or(&UNDEFINED);
                match_pattern(pattern, entry, selections)
            }),
            None => false,
        },
        Pattern::Literal(expected) => expected.same_value(value),
    })
}

/// Evaluate `pattern` against `value` with a fresh accumulator.
pub fn evaluate(pattern: &Pattern, value: &Value) -> MatchResult {
    let mut selections = Selections::new();
    if match_pattern(pattern, value, &mut selections) {
        MatchResult::success(selections)
    } else {
        MatchResult::failure()
    }
}

fn replay(result: MatchResult, selections: &mut Selections) -> bool {
    if result.matched {
        if let Some(found) = result.selections {
            selections.extend(found);
        }
    }
    result.matched
}

fn match_positional(patterns: &[Pattern], values: &[Value], selections: &mut Selections) -> bool {
    patterns
        .iter()
        .zip(values)
        .all(|(pattern, value)| match_pattern(pattern, value, selections))
}

/// A record field absent from the value passes only under an optional
/// pattern, which then sees `Undefined`.
fn match_record(fields: &[(Arc<str>, Pattern)], value: &Value, selections: &mut Selections) -> bool {
    let Some(record) = value.fields() else {
        return false;
    };
    fields.iter().all(|(key, pattern)| match record.get(key) {
        Some(field) => match_pattern(pattern, field, selections),
        None => pattern.is_optional() && match_pattern(pattern, &UNDEFINED, selections),
    })
}

fn match_variadic(
    head: &[Pattern],
    rest: &ArrayOf,
    tail: &[Pattern],
    value: &Value,
    selections: &mut Selections,
) -> bool {
    let Some(items) = value.as_list() else {
        return false;
    };
    if items.len() < head.len() + tail.len() {
        return false;
    }
    let (front, remainder) = items.split_at(head.len());
    let (middle, back) = remainder.split_at(remainder.len() - tail.len());

    match_positional(head, front, selections)
        && replay(rest.probe_items(middle), selections)
        && match_positional(tail, back, selections)
}

/// Set literal rules:
///
/// - no members: the set must be empty;
/// - a single non-literal member: every element must match it;
/// - otherwise each member must be present: a literal by membership, any
///   other pattern by matching at least one element.
fn match_set(members: &[Pattern], set: &SetValue, selections: &mut Selections) -> bool {
    match members {
        [] => set.is_empty(),
        [member] if !matches!(member, Pattern::Literal(_)) => {
            let keys = collect_selection_keys(member);
            replay(probe_elements(member, &keys, set.iter()), selections)
        }
        _ => members.iter().all(|member| match member {
            Pattern::Literal(expected) => set.contains(expected),
            _ => set.iter().any(|item| {
                let mut found = Selections::new();
                let matched = match_pattern(member, item, &mut found);
                if matched {
                    selections.extend(found);
                }
                matched
            }),
        }),
    }
}
