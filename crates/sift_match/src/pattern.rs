//! Pattern trees.
//!
//! A [`Pattern`] is an immutable tree of literals, structural containers and
//! matcher nodes. Containers are recursed into by the evaluator; matcher
//! nodes are opaque to it and answer through the [`Matcher`] protocol.
//!
//! Patterns are plain data and can be shared freely across threads.
//!
//! [`Matcher`]: crate::Matcher

use std::sync::Arc;

use sift_value::Value;

use crate::matcher::Matcher;
use crate::matchers::{And, ArrayOf, MatcherNode, Optional, Or, Select};
use crate::selection::SelectionKey;
use crate::stack::ensure_sufficient_stack;

/// A node of a pattern tree.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Primitive compared with SameValue.
    Literal(Value),
    /// Keyed record; keys absent from the pattern are unconstrained.
    Record(Vec<(Arc<str>, Pattern)>),
    /// Fixed-length sequence.
    Tuple(Vec<Pattern>),
    /// Sequence with fixed leading and trailing elements around a rest.
    Variadic {
        head: Vec<Pattern>,
        rest: ArrayOf,
        tail: Vec<Pattern>,
    },
    /// Membership set literal.
    SetLiteral(Vec<Pattern>),
    /// Map literal keyed by values.
    MapLiteral(Vec<(Value, Pattern)>),
    Matcher(MatcherNode),
}

impl Pattern {
    /// Literal pattern compared with SameValue.
    pub fn literal(value: impl Into<Value>) -> Self {
        Pattern::Literal(value.into())
    }

    /// Record pattern. A key given twice keeps its last sub-pattern.
    pub fn record<K, P, I>(fields: I) -> Self
    where
        K: Into<Arc<str>>,
        P: Into<Pattern>,
        I: IntoIterator<Item = (K, P)>,
    {
        let mut out: Vec<(Arc<str>, Pattern)> = Vec::new();
        for (key, pattern) in fields {
            let key = key.into();
            let pattern = pattern.into();
            match out.iter_mut().find(|(existing, _)| *existing == key) {
                Some(slot) => slot.1 = pattern,
                None => out.push((key, pattern)),
            }
        }
        Pattern::Record(out)
    }

    pub fn tuple<P, I>(items: I) -> Self
    where
        P: Into<Pattern>,
        I: IntoIterator<Item = P>,
    {
        Pattern::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Sequence pattern whose elements between `head` and `tail` must all
    /// match `rest`.
    pub fn variadic<H, T>(head: H, rest: impl Into<Pattern>, tail: T) -> Self
    where
        H: IntoIterator,
        H::Item: Into<Pattern>,
        T: IntoIterator,
        T::Item: Into<Pattern>,
    {
        Pattern::Variadic {
            head: head.into_iter().map(Into::into).collect(),
            rest: ArrayOf::new(Some(rest.into())),
            tail: tail.into_iter().map(Into::into).collect(),
        }
    }

    pub fn set_literal<P, I>(members: I) -> Self
    where
        P: Into<Pattern>,
        I: IntoIterator<Item = P>,
    {
        Pattern::SetLiteral(members.into_iter().map(Into::into).collect())
    }

    pub fn map_literal<K, P, I>(entries: I) -> Self
    where
        K: Into<Value>,
        P: Into<Pattern>,
        I: IntoIterator<Item = (K, P)>,
    {
        Pattern::MapLiteral(
            entries
                .into_iter()
                .map(|(key, pattern)| (key.into(), pattern.into()))
                .collect(),
        )
    }

    /// Build a pattern that mirrors `value`.
    ///
    /// Lists, records, sets and maps become structural patterns so that a
    /// parsed document can be used as a pattern directly; everything else is
    /// a literal.
    pub fn from_value(value: Value) -> Self {
        ensure_sufficient_stack(|| match &value {
            Value::List(items) => {
                Pattern::Tuple(items.iter().cloned().map(Pattern::from_value).collect())
            }
            Value::Record(record) => Pattern::Record(
                record
                    .iter()
                    .map(|(key, field)| (Arc::from(key), Pattern::from_value(field.clone())))
                    .collect(),
            ),
            Value::Set(set) => {
                Pattern::SetLiteral(set.iter().cloned().map(Pattern::from_value).collect())
            }
            Value::Map(map) => Pattern::MapLiteral(
                map.iter()
                    .map(|(key, entry)| (key.clone(), Pattern::from_value(entry.clone())))
                    .collect(),
            ),
            _ => Pattern::Literal(value),
        })
    }

    // Chainable modifiers

    /// Also match an absent value.
    #[must_use]
    pub fn optional(self) -> Pattern {
        Pattern::Matcher(MatcherNode::Optional(Optional::new(self)))
    }

    /// Select the matched value under the anonymous key.
    #[must_use]
    pub fn select(self) -> Pattern {
        let select = Select::new(SelectionKey::Anonymous, Some(self));
        Pattern::Matcher(MatcherNode::Select(select))
    }

    /// Select the matched value under `name`.
    #[must_use]
    pub fn select_as(self, name: impl Into<Arc<str>>) -> Pattern {
        let select = Select::new(SelectionKey::named(name), Some(self));
        Pattern::Matcher(MatcherNode::Select(select))
    }

    /// Require `other` to match as well.
    #[must_use]
    pub fn and(self, other: impl Into<Pattern>) -> Pattern {
        Pattern::Matcher(MatcherNode::And(And::new(vec![self, other.into()])))
    }

    /// Accept values matching either pattern.
    #[must_use]
    pub fn or(self, other: impl Into<Pattern>) -> Pattern {
        Pattern::Matcher(MatcherNode::Or(Or::new(vec![self, other.into()])))
    }

    pub fn is_matcher(&self) -> bool {
        matches!(self, Pattern::Matcher(_))
    }

    /// Whether a record field with this pattern may be absent.
    pub fn is_optional(&self) -> bool {
        match self {
            Pattern::Matcher(node) => node.is_optional(),
            _ => false,
        }
    }
}

impl From<Value> for Pattern {
    fn from(value: Value) -> Self {
        Pattern::from_value(value)
    }
}

impl From<MatcherNode> for Pattern {
    fn from(node: MatcherNode) -> Self {
        Pattern::Matcher(node)
    }
}

macro_rules! impl_literal_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Pattern {
                fn from(value: $ty) -> Self {
                    Pattern::Literal(Value::from(value))
                }
            }
        )*
    };
}

impl_literal_from!(bool, f64, i32, i64, &str, String);

/// Build a record pattern from `key => pattern` pairs.
///
/// ```text
/// record! { "type" => "ok", "data" => p::select() }
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Pattern::Record(::std::vec::Vec::new())
    };
    ($($key:expr => $pattern:expr),+ $(,)?) => {
        $crate::Pattern::record([$(($key, $crate::Pattern::from($pattern))),+])
    };
}

/// Build a fixed-length sequence pattern.
#[macro_export]
macro_rules! tuple {
    () => {
        $crate::Pattern::Tuple(::std::vec::Vec::new())
    };
    ($($pattern:expr),+ $(,)?) => {
        $crate::Pattern::tuple([$($crate::Pattern::from($pattern)),+])
    };
}
