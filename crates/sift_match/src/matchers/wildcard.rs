//! Type wildcards and their refinements.

use std::sync::Arc;

use regex::Regex;
use smallvec::SmallVec;

use sift_value::{PrimitiveKind, Value, ValueKind};

use super::MatcherNode;
use crate::matcher::{MatchResult, Matcher};
use crate::pattern::Pattern;

/// Matches every value of one runtime type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WildcardKind {
    Any,
    String,
    /// Any number except `NaN`.
    Number,
    Boolean,
    BigInt,
    Symbol,
    /// `null` or `undefined`.
    Nullish,
    /// Anything but `null` and `undefined`.
    NonNullable,
}

impl WildcardKind {
    pub fn accepts(self, value: &Value) -> bool {
        let kind = value.classify();
        match self {
            WildcardKind::Any => true,
            WildcardKind::String => kind == ValueKind::Primitive(PrimitiveKind::String),
            WildcardKind::Number => value.as_number().is_some_and(|n| !n.is_nan()),
            WildcardKind::Boolean => kind == ValueKind::Primitive(PrimitiveKind::Boolean),
            WildcardKind::BigInt => kind == ValueKind::Primitive(PrimitiveKind::BigInt),
            WildcardKind::Symbol => kind == ValueKind::Primitive(PrimitiveKind::Symbol),
            WildcardKind::Nullish => kind.is_nullish(),
            WildcardKind::NonNullable => !kind.is_nullish(),
        }
    }
}

impl Matcher for WildcardKind {
    fn name(&self) -> &'static str {
        match self {
            WildcardKind::Any => "any",
            WildcardKind::String => "string",
            WildcardKind::Number => "number",
            WildcardKind::Boolean => "boolean",
            WildcardKind::BigInt => "bigint",
            WildcardKind::Symbol => "symbol",
            WildcardKind::Nullish => "nullish",
            WildcardKind::NonNullable => "nonNullable",
        }
    }

    fn probe(&self, value: &Value) -> MatchResult {
        MatchResult::from_bool(self.accepts(value))
    }
}

// Refinements

/// A constraint on a string value.
#[derive(Clone, Debug)]
pub enum StringCheck {
    StartsWith(Arc<str>),
    EndsWith(Arc<str>),
    Includes(Arc<str>),
    /// Lengths count Unicode scalar values.
    MinLength(usize),
    MaxLength(usize),
    Length(usize),
    Regex(Regex),
}

impl StringCheck {
    pub fn accepts(&self, s: &str) -> bool {
        match self {
            StringCheck::StartsWith(prefix) => s.starts_with(&**prefix),
            StringCheck::EndsWith(suffix) => s.ends_with(&**suffix),
            StringCheck::Includes(needle) => s.contains(&**needle),
            StringCheck::MinLength(min) => s.chars().count() >= *min,
            StringCheck::MaxLength(max) => s.chars().count() <= *max,
            StringCheck::Length(len) => s.chars().count() == *len,
            StringCheck::Regex(regex) => regex.is_match(s),
        }
    }
}

/// A constraint on a number value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NumberCheck {
    /// Inclusive on both ends.
    Between(f64, f64),
    Lt(f64),
    Gt(f64),
    Lte(f64),
    Gte(f64),
    Int,
    Finite,
    Positive,
    Negative,
}

impl NumberCheck {
    pub fn accepts(self, n: f64) -> bool {
        match self {
            NumberCheck::Between(min, max) => min <= n && n <= max,
            NumberCheck::Lt(bound) => n < bound,
            NumberCheck::Gt(bound) => n > bound,
            NumberCheck::Lte(bound) => n <= bound,
            NumberCheck::Gte(bound) => n >= bound,
            NumberCheck::Int => n.is_finite() && n.fract() == 0.0,
            NumberCheck::Finite => n.is_finite(),
            NumberCheck::Positive => n > 0.0,
            NumberCheck::Negative => n < 0.0,
        }
    }
}

/// A constraint on a bigint value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BigIntCheck {
    /// Inclusive on both ends.
    Between(i128, i128),
    Lt(i128),
    Gt(i128),
    Lte(i128),
    Gte(i128),
    Positive,
    Negative,
}

impl BigIntCheck {
    pub fn accepts(self, n: i128) -> bool {
        match self {
            BigIntCheck::Between(min, max) => min <= n && n <= max,
            BigIntCheck::Lt(bound) => n < bound,
            BigIntCheck::Gt(bound) => n > bound,
            BigIntCheck::Lte(bound) => n <= bound,
            BigIntCheck::Gte(bound) => n >= bound,
            BigIntCheck::Positive => n > 0,
            BigIntCheck::Negative => n < 0,
        }
    }
}

/// A type wildcard narrowed by one or more checks, all of which must hold.
#[derive(Clone, Debug)]
pub enum Refined {
    String(SmallVec<[StringCheck; 2]>),
    Number(SmallVec<[NumberCheck; 2]>),
    BigInt(SmallVec<[BigIntCheck; 2]>),
}

impl Matcher for Refined {
    fn name(&self) -> &'static str {
        match self {
            Refined::String(_) => "string",
            Refined::Number(_) => "number",
            Refined::BigInt(_) => "bigint",
        }
    }

    fn probe(&self, value: &Value) -> MatchResult {
        let matched = match (self, value) {
            (Refined::String(checks), Value::Str(s)) => {
                checks.iter().all(|check| check.accepts(s))
            }
            (Refined::Number(checks), Value::Number(n)) => {
                !n.is_nan() && checks.iter().all(|check| check.accepts(*n))
            }
            (Refined::BigInt(checks), Value::BigInt(n)) => {
                checks.iter().all(|check| check.accepts(*n))
            }
            _ => false,
        };
        MatchResult::from_bool(matched)
    }
}

// Typed wildcard builders

/// `string()` wildcard being refined.
#[derive(Clone, Debug, Default)]
pub struct StringPattern {
    checks: SmallVec<[StringCheck; 2]>,
}

impl StringPattern {
    pub fn new() -> Self {
        StringPattern::default()
    }

    fn check(mut self, check: StringCheck) -> Self {
        self.checks.push(check);
        self
    }

    #[must_use]
    pub fn starts_with(self, prefix: impl Into<Arc<str>>) -> Self {
        self.check(StringCheck::StartsWith(prefix.into()))
    }

    #[must_use]
    pub fn ends_with(self, suffix: impl Into<Arc<str>>) -> Self {
        self.check(StringCheck::EndsWith(suffix.into()))
    }

    #[must_use]
    pub fn includes(self, needle: impl Into<Arc<str>>) -> Self {
        self.check(StringCheck::Includes(needle.into()))
    }

    #[must_use]
    pub fn min_length(self, min: usize) -> Self {
        self.check(StringCheck::MinLength(min))
    }

    #[must_use]
    pub fn max_length(self, max: usize) -> Self {
        self.check(StringCheck::MaxLength(max))
    }

    #[must_use]
    pub fn length(self, len: usize) -> Self {
        self.check(StringCheck::Length(len))
    }

    /// Require a match of `regex` somewhere in the string.
    #[must_use]
    pub fn regex(self, regex: Regex) -> Self {
        self.check(StringCheck::Regex(regex))
    }

    pub fn into_pattern(self) -> Pattern {
        if self.checks.is_empty() {
            Pattern::Matcher(MatcherNode::Wildcard(WildcardKind::String))
        } else {
            Pattern::Matcher(MatcherNode::Refined(Refined::String(self.checks)))
        }
    }
}

/// `number()` wildcard being refined.
#[derive(Clone, Debug, Default)]
pub struct NumberPattern {
    checks: SmallVec<[NumberCheck; 2]>,
}

impl NumberPattern {
    pub fn new() -> Self {
        NumberPattern::default()
    }

    fn check(mut self, check: NumberCheck) -> Self {
        self.checks.push(check);
        self
    }

    #[must_use]
    pub fn between(self, min: f64, max: f64) -> Self {
        self.check(NumberCheck::Between(min, max))
    }

    #[must_use]
    pub fn lt(self, bound: f64) -> Self {
        self.check(NumberCheck::Lt(bound))
    }

    #[must_use]
    pub fn gt(self, bound: f64) -> Self {
        self.check(NumberCheck::Gt(bound))
    }

    #[must_use]
    pub fn lte(self, bound: f64) -> Self {
        self.check(NumberCheck::Lte(bound))
    }

    #[must_use]
    pub fn gte(self, bound: f64) -> Self {
        self.check(NumberCheck::Gte(bound))
    }

    #[must_use]
    pub fn int(self) -> Self {
        self.check(NumberCheck::Int)
    }

    #[must_use]
    pub fn finite(self) -> Self {
        self.check(NumberCheck::Finite)
    }

    #[must_use]
    pub fn positive(self) -> Self {
        self.check(NumberCheck::Positive)
    }

    #[must_use]
    pub fn negative(self) -> Self {
        self.check(NumberCheck::Negative)
    }

    pub fn into_pattern(self) -> Pattern {
        if self.checks.is_empty() {
            Pattern::Matcher(MatcherNode::Wildcard(WildcardKind::Number))
        } else {
            Pattern::Matcher(MatcherNode::Refined(Refined::Number(self.checks)))
        }
    }
}

/// `bigint()` wildcard being refined.
#[derive(Clone, Debug, Default)]
pub struct BigIntPattern {
    checks: SmallVec<[BigIntCheck; 2]>,
}

impl BigIntPattern {
    pub fn new() -> Self {
        BigIntPattern::default()
    }

    fn check(mut self, check: BigIntCheck) -> Self {
        self.checks.push(check);
        self
    }

    #[must_use]
    pub fn between(self, min: i128, max: i128) -> Self {
        self.check(BigIntCheck::Between(min, max))
    }

    #[must_use]
    pub fn lt(self, bound: i128) -> Self {
        self.check(BigIntCheck::Lt(bound))
    }

    #[must_use]
    pub fn gt(self, bound: i128) -> Self {
        self.check(BigIntCheck::Gt(bound))
    }

    #[must_use]
    pub fn lte(self, bound: i128) -> Self {
        self.check(BigIntCheck::Lte(bound))
    }

    #[must_use]
    pub fn gte(self, bound: i128) -> Self {
        self.check(BigIntCheck::Gte(bound))
    }

    #[must_use]
    pub fn positive(self) -> Self {
        self.check(BigIntCheck::Positive)
    }

    #[must_use]
    pub fn negative(self) -> Self {
        self.check(BigIntCheck::Negative)
    }

    pub fn into_pattern(self) -> Pattern {
        if self.checks.is_empty() {
            Pattern::Matcher(MatcherNode::Wildcard(WildcardKind::BigInt))
        } else {
            Pattern::Matcher(MatcherNode::Refined(Refined::BigInt(self.checks)))
        }
    }
}

/// The chainable modifiers of `Pattern`, available before conversion.
macro_rules! impl_chain {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                pub fn optional(self) -> Pattern {
                    self.into_pattern().optional()
                }

                pub fn select(self) -> Pattern {
                    self.into_pattern().select()
                }

                pub fn select_as(self, name: impl Into<Arc<str>>) -> Pattern {
                    self.into_pattern().select_as(name)
                }

                pub fn and(self, other: impl Into<Pattern>) -> Pattern {
                    self.into_pattern().and(other)
                }

                pub fn or(self, other: impl Into<Pattern>) -> Pattern {
                    self.into_pattern().or(other)
                }
            }

            impl From<$ty> for Pattern {
                fn from(pattern: $ty) -> Self {
                    pattern.into_pattern()
                }
            }
        )*
    };
}

impl_chain!(StringPattern, NumberPattern, BigIntPattern);

impl From<WildcardKind> for Pattern {
    fn from(kind: WildcardKind) -> Self {
        Pattern::Matcher(MatcherNode::Wildcard(kind))
    }
}
