//! The matcher protocol.
//!
//! Every non-structural pattern node implements [`Matcher`]. The evaluator
//! never inspects which kind of matcher it holds: it calls
//! [`Matcher::probe`] and replays whatever selections come back. Adding a new
//! matcher kind means implementing this trait, nothing else.

use std::fmt;

use sift_value::Value;

use crate::keys::SelectionShape;
use crate::selection::Selections;

/// Outcome of probing one value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchResult {
    pub matched: bool,
    pub selections: Option<Selections>,
}

impl MatchResult {
    /// A match with the given selections.
    pub fn success(selections: Selections) -> Self {
        MatchResult {
            matched: true,
            selections: Some(selections),
        }
    }

    pub fn failure() -> Self {
        MatchResult::default()
    }

    /// A result that carries no selections either way.
    pub fn from_bool(matched: bool) -> Self {
        MatchResult {
            matched,
            selections: None,
        }
    }

    pub fn with_selections(matched: bool, selections: Selections) -> Self {
        MatchResult {
            matched,
            selections: Some(selections),
        }
    }
}

/// Capability implemented by wildcard, guard, combinator, select and
/// user-defined pattern nodes.
///
/// Implementations must be pure: probing the same value twice yields the same
/// result, and the value is never mutated.
pub trait Matcher: Send + Sync + fmt::Debug {
    /// Kind label used in logs.
    fn name(&self) -> &'static str;

    /// Test `value`, reporting the selections made on success.
    fn probe(&self, value: &Value) -> MatchResult;

    /// Keys this node may select, in declaration order.
    ///
    /// Used to reject ambiguous patterns up front and to seed keys that an
    /// alternative branch did not bind.
    fn selection_shape(&self) -> SelectionShape {
        SelectionShape::empty()
    }

    /// Whether a record field guarded by this node may be absent.
    fn is_optional(&self) -> bool {
        false
    }
}
