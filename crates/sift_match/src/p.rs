//! Pattern-construction functions.
//!
//! ```text
//! use sift_match::p;
//!
//! let pattern = record! {
//!     "status" => "success",
//!     "data" => p::array_of(record! { "name" => p::select() }),
//! };
//! ```

use std::sync::Arc;

use sift_value::Value;

use crate::lookup::is_matching;
use crate::matcher::Matcher;
use crate::matchers::{
    And, ArrayOf, BigIntPattern, Guard, InstanceOf, MapOf, MatcherNode, Not, NumberPattern,
    Optional, Or, Select, SetOf, StringPattern, WildcardKind,
};
use crate::pattern::Pattern;
use crate::selection::SelectionKey;

/// The shared catch-all pattern.
pub static ANY: Pattern = Pattern::Matcher(MatcherNode::Wildcard(WildcardKind::Any));

fn node(node: MatcherNode) -> Pattern {
    Pattern::Matcher(node)
}

/// Matches every value.
pub fn any() -> Pattern {
    ANY.clone()
}

/// Matches strings; refine with `starts_with`, `regex`, ...
pub fn string() -> StringPattern {
    StringPattern::new()
}

/// Matches numbers other than `NaN`; refine with `between`, `int`, ...
pub fn number() -> NumberPattern {
    NumberPattern::new()
}

pub fn bigint() -> BigIntPattern {
    BigIntPattern::new()
}

pub fn boolean() -> Pattern {
    node(MatcherNode::Wildcard(WildcardKind::Boolean))
}

pub fn symbol() -> Pattern {
    node(MatcherNode::Wildcard(WildcardKind::Symbol))
}

/// Matches `null` and `undefined`.
pub fn nullish() -> Pattern {
    node(MatcherNode::Wildcard(WildcardKind::Nullish))
}

/// Matches everything except `null` and `undefined`.
pub fn non_nullable() -> Pattern {
    node(MatcherNode::Wildcard(WildcardKind::NonNullable))
}

/// Matches `undefined` or `pattern`. A record field under this pattern may
/// be absent.
pub fn optional(pattern: impl Into<Pattern>) -> Pattern {
    node(MatcherNode::Optional(Optional::new(pattern.into())))
}

/// Matches any sequence.
pub fn array() -> Pattern {
    node(MatcherNode::Array(ArrayOf::new(None)))
}

/// Matches sequences whose items all match `element`.
pub fn array_of(element: impl Into<Pattern>) -> Pattern {
    node(MatcherNode::Array(ArrayOf::new(Some(element.into()))))
}

/// Matches any set.
pub fn set() -> Pattern {
    node(MatcherNode::Set(SetOf::new(None)))
}

pub fn set_of(element: impl Into<Pattern>) -> Pattern {
    node(MatcherNode::Set(SetOf::new(Some(element.into()))))
}

/// Matches any map.
pub fn map() -> Pattern {
    node(MatcherNode::Map(MapOf::new(None, None)))
}

/// Matches maps whose keys all match `key` and values all match `value`.
pub fn map_of(key: impl Into<Pattern>, value: impl Into<Pattern>) -> Pattern {
    node(MatcherNode::Map(MapOf::new(
        Some(key.into()),
        Some(value.into()),
    )))
}

/// Matches when every pattern matches.
pub fn intersection<I>(patterns: I) -> Pattern
where
    I: IntoIterator,
    I::Item: Into<Pattern>,
{
    node(MatcherNode::And(And::new(
        patterns.into_iter().map(Into::into).collect(),
    )))
}

/// Matches when any pattern matches; the first matching one selects.
pub fn union<I>(patterns: I) -> Pattern
where
    I: IntoIterator,
    I::Item: Into<Pattern>,
{
    node(MatcherNode::Or(Or::new(
        patterns.into_iter().map(Into::into).collect(),
    )))
}

pub fn not(pattern: impl Into<Pattern>) -> Pattern {
    node(MatcherNode::Not(Not::new(pattern.into())))
}

/// Matches when `predicate` holds.
pub fn when(predicate: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Pattern {
    node(MatcherNode::Guard(Guard::new(predicate)))
}

/// Selects the current value under the anonymous key.
pub fn select() -> Pattern {
    node(MatcherNode::Select(Select::new(SelectionKey::Anonymous, None)))
}

/// Selects the current value under `name`.
pub fn select_as(name: impl Into<Arc<str>>) -> Pattern {
    node(MatcherNode::Select(Select::new(
        SelectionKey::named(name),
        None,
    )))
}

/// Matches opaque objects whose class lineage contains `class`.
pub fn instance_of(class: impl Into<Arc<str>>) -> Pattern {
    node(MatcherNode::InstanceOf(InstanceOf::new(class)))
}

/// A guard that holds when `pattern` matches. Never selects.
pub fn shape(pattern: impl Into<Pattern>) -> Pattern {
    let pattern = pattern.into();
    node(MatcherNode::Guard(Guard::labeled("shape", move |value| {
        is_matching(&pattern, value)
    })))
}

/// Wrap a user-defined matcher.
pub fn custom(matcher: impl Matcher + 'static) -> Pattern {
    node(MatcherNode::Custom(Arc::new(matcher)))
}

#[cfg(test)]
mod tests;
