//! Selection key analysis.
//!
//! Walks a pattern tree without any value and computes which selection keys
//! it can bind. The result serves two purposes:
//!
//! - rejecting ambiguous patterns (two anonymous selections in one branch,
//!   anonymous mixed with named, a named key bound twice in one branch)
//!   before a single clause runs;
//! - telling `or`, `optional` and the collection combinators which keys to
//!   seed when the branch that would bind them does not run.

use std::sync::Arc;

use smallvec::{smallvec, SmallVec};

use crate::errors::PatternError;
use crate::matcher::Matcher;
use crate::pattern::Pattern;
use crate::selection::SelectionKey;
use crate::stack::ensure_sufficient_stack;

/// Selection keys a pattern can bind, plus the first conflict found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionShape {
    /// Unique keys in first-declaration order.
    keys: SmallVec<[SelectionKey; 4]>,
    /// Anonymous selections reachable in the widest single branch.
    anonymous: usize,
    conflict: Option<PatternError>,
}

impl SelectionShape {
    pub fn empty() -> Self {
        SelectionShape::default()
    }

    pub fn single(key: SelectionKey) -> Self {
        SelectionShape {
            anonymous: usize::from(key.is_anonymous()),
            keys: smallvec![key],
            conflict: None,
        }
    }

    /// Shape of a node that binds `keys` one after another.
    pub fn sequential<I: IntoIterator<Item = SelectionKey>>(keys: I) -> Self {
        keys.into_iter()
            .fold(SelectionShape::empty(), |shape, key| shape.then(SelectionShape::single(key)))
    }

    /// Compose with a shape whose selections are made in the same branch.
    #[must_use]
    pub fn then(self, next: SelectionShape) -> Self {
        let mut merged = SelectionShape {
            keys: self.keys,
            anonymous: self.anonymous + next.anonymous,
            conflict: self.conflict.or(next.conflict),
        };
        for key in next.keys {
            if !merged.keys.contains(&key) {
                merged.keys.push(key);
            } else if let SelectionKey::Named(name) = &key {
                merged.flag(PatternError::DuplicateSelection {
                    key: Arc::clone(name),
                });
            }
        }
        if merged.anonymous > 1 {
            merged.flag(PatternError::MultipleAnonymousSelections);
        }
        merged.check_mixed();
        merged
    }

    /// Compose with a mutually exclusive alternative.
    #[must_use]
    pub fn either(self, other: SelectionShape) -> Self {
        let mut merged = SelectionShape {
            keys: self.keys,
            anonymous: self.anonymous.max(other.anonymous),
            conflict: self.conflict.or(other.conflict),
        };
        for key in other.keys {
            if !merged.keys.contains(&key) {
                merged.keys.push(key);
            }
        }
        merged.check_mixed();
        merged
    }

    pub fn keys(&self) -> &[SelectionKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn conflict(&self) -> Option<&PatternError> {
        self.conflict.as_ref()
    }

    /// Fail with the first conflict, if any.
    pub fn validate(self) -> Result<Self, PatternError> {
        match self.conflict {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }

    fn flag(&mut self, err: PatternError) {
        if self.conflict.is_none() {
            self.conflict = Some(err);
        }
    }

    fn check_mixed(&mut self) {
        let anonymous = self.keys.iter().any(SelectionKey::is_anonymous);
        let named = self.keys.iter().any(|key| !key.is_anonymous());
        if anonymous && named {
            self.flag(PatternError::MixedSelections);
        }
    }
}

/// Compute the selection shape of a pattern tree.
pub fn selection_shape(pattern: &Pattern) -> SelectionShape {
    ensure_sufficient_stack(|| match pattern {
        Pattern::Literal(_) => SelectionShape::empty(),
        Pattern::Record(fields) => sequence(fields.iter().map(|(_, field)| field)),
        Pattern::Tuple(items) | Pattern::SetLiteral(items) => sequence(items),
        Pattern::Variadic { head, rest, tail } => sequence(head)
            .then(rest.selection_shape())
            .then(sequence(tail)),
        Pattern::MapLiteral(entries) => sequence(entries.iter().map(|(_, value)| value)),
        Pattern::Matcher(node) => node.selection_shape(),
    })
}

fn sequence<'a>(patterns: impl IntoIterator<Item = &'a Pattern>) -> SelectionShape {
    patterns
        .into_iter()
        .fold(SelectionShape::empty(), |shape, pattern| {
            shape.then(selection_shape(pattern))
        })
}

/// Every selection key a pattern can bind, in first-declaration order.
pub fn collect_selection_keys(pattern: &Pattern) -> Vec<SelectionKey> {
    selection_shape(pattern).keys().to_vec()
}

/// Reject patterns whose selections cannot be bound unambiguously.
pub fn validate_pattern(pattern: &Pattern) -> Result<SelectionShape, PatternError> {
    let shape = selection_shape(pattern);
    if let Some(err) = shape.conflict() {
        tracing::debug!(%err, "pattern rejected");
    }
    shape.validate()
}
