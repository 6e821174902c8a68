//! The clause sequencer behind `match_value`.
//!
//! A [`Match`] holds one input value and a persistent list of clauses. Every
//! appending method returns a new `Match` that shares the existing clauses
//! with its parent, so a partially built match can be extended in several
//! directions without one branch seeing another's clauses.
//!
//! ```text
//! let label = match_value(event)
//!     .with(record! { "type" => "error", "message" => p::select() }, |msg, _| {
//!         format!("failed: {}", msg.into_value())
//!     })
//!     .with(record! { "type" => "ok" }, |_, _| "ok".to_string())
//!     .run()?;
//! ```
//!
//! Clauses are tried strictly in registration order; the first one whose
//! pattern matches and whose guard (if any) holds wins.

use std::fmt;
use std::sync::Arc;

use sift_value::Value;

use crate::errors::{MatchError, NonExhaustiveError, PatternError};
use crate::evaluator::match_pattern;
use crate::keys::validate_pattern;
use crate::matchers::{MatcherNode, Or};
use crate::p::ANY;
use crate::pattern::Pattern;
use crate::selection::{Selected, Selections};

type Handler<'a, R> = Arc<dyn Fn(Selected, &Value) -> R + 'a>;
type ClauseGuard<'a> = Arc<dyn Fn(&Value) -> bool + 'a>;

struct Clause<'a, R> {
    pattern: Pattern,
    guard: Option<ClauseGuard<'a>>,
    handler: Handler<'a, R>,
}

/// One link of the persistent clause list; `prev` points at the clause
/// registered just before this one.
struct ClauseNode<'a, R> {
    clause: Clause<'a, R>,
    prev: Option<Arc<ClauseNode<'a, R>>>,
}

/// A match over one input value.
///
/// Build with [`match_value`], append clauses with [`Match::with`] and
/// friends, and finish with [`Match::run`], [`Match::otherwise`] or
/// [`Match::exhaustive`].
pub struct Match<'a, R> {
    input: Value,
    last: Option<Arc<ClauseNode<'a, R>>>,
    len: usize,
    /// First malformed pattern registered; poisons every terminal.
    invalid: Option<PatternError>,
}

/// Start a match over `value`.
pub fn match_value<'a, R>(value: impl Into<Value>) -> Match<'a, R> {
    Match::new(value.into())
}

impl<'a, R> Match<'a, R> {
    pub fn new(input: Value) -> Self {
        Match {
            input,
            last: None,
            len: 0,
            invalid: None,
        }
    }

    pub fn input(&self) -> &Value {
        &self.input
    }

    /// Number of registered clauses.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add a clause run when `pattern` matches.
    ///
    /// The handler receives the selections (or the input itself when the
    /// pattern selects nothing) and the input.
    #[must_use]
    pub fn with(
        &self,
        pattern: impl Into<Pattern>,
        handler: impl Fn(Selected, &Value) -> R + 'a,
    ) -> Self {
        self.push(pattern.into(), None, Arc::new(handler))
    }

    /// Add a clause run when `pattern` matches and `guard` holds.
    #[must_use]
    pub fn with_guard(
        &self,
        pattern: impl Into<Pattern>,
        guard: impl Fn(&Value) -> bool + 'a,
        handler: impl Fn(Selected, &Value) -> R + 'a,
    ) -> Self {
        self.push(pattern.into(), Some(Arc::new(guard)), Arc::new(handler))
    }

    /// Add one clause run when any of `patterns` matches.
    #[must_use]
    pub fn with_any<I>(
        &self,
        patterns: I,
        handler: impl Fn(Selected, &Value) -> R + 'a,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Pattern>,
    {
        let patterns = patterns.into_iter().map(Into::into).collect();
        let pattern = Pattern::Matcher(MatcherNode::Or(Or::new(patterns)));
        self.push(pattern, None, Arc::new(handler))
    }

    /// Add a clause run when `predicate` holds for the input.
    #[must_use]
    pub fn when(
        &self,
        predicate: impl Fn(&Value) -> bool + 'a,
        handler: impl Fn(Selected, &Value) -> R + 'a,
    ) -> Self {
        self.push(ANY.clone(), Some(Arc::new(predicate)), Arc::new(handler))
    }

    fn push(
        &self,
        pattern: Pattern,
        guard: Option<ClauseGuard<'a>>,
        handler: Handler<'a, R>,
    ) -> Self {
        let invalid = self
            .invalid
            .clone()
            .or_else(|| validate_pattern(&pattern).err());
        let node = ClauseNode {
            clause: Clause {
                pattern,
                guard,
                handler,
            },
            prev: self.last.clone(),
        };
        Match {
            input: self.input.clone(),
            last: Some(Arc::new(node)),
            len: self.len + 1,
            invalid,
        }
    }

    /// Clauses in registration order.
    fn clauses(&self) -> Vec<&Clause<'a, R>> {
        let mut clauses = Vec::with_capacity(self.len);
        let mut cursor = self.last.as_deref();
        while let Some(node) = cursor {
            clauses.push(&node.clause);
            cursor = node.prev.as_deref();
        }
        clauses.reverse();
        clauses
    }

    /// Run the first matching clause.
    ///
    /// Fails with [`MatchError::NonExhaustive`] when no clause matches and
    /// with [`MatchError::InvalidPattern`] when a registered pattern is
    /// malformed, in which case no clause is evaluated.
    #[tracing::instrument(level = "trace", skip_all, fields(clauses = self.len))]
    pub fn run(&self) -> Result<R, MatchError> {
        if let Some(err) = &self.invalid {
            return Err(err.clone().into());
        }
        for (index, clause) in self.clauses().into_iter().enumerate() {
            let _span = tracing::trace_span!("clause", index).entered();
            let mut selections = Selections::new();
            if !match_pattern(&clause.pattern, &self.input, &mut selections) {
                continue;
            }
            if let Some(guard) = &clause.guard {
                if !guard(&self.input) {
                    continue;
                }
            }
            tracing::debug!(clause = index, "clause matched");
            let selected = selections.into_selected(&self.input);
            return Ok((clause.handler)(selected, &self.input));
        }
        tracing::debug!(input = %self.input, "no clause matched");
        Err(NonExhaustiveError::new(self.input.clone()).into())
    }

    /// Run the first matching clause, falling back to `handler`.
    pub fn otherwise(
        &self,
        handler: impl Fn(Selected, &Value) -> R + 'a,
    ) -> Result<R, MatchError> {
        self.push(ANY.clone(), None, Arc::new(handler)).run()
    }

    /// Same as [`Match::run`]. Marks a match whose clauses are expected to
    /// cover every input; an uncovered input still fails at runtime.
    pub fn exhaustive(&self) -> Result<R, MatchError> {
        self.run()
    }
}

impl<R> Clone for Match<'_, R> {
    fn clone(&self) -> Self {
        Match {
            input: self.input.clone(),
            last: self.last.clone(),
            len: self.len,
            invalid: self.invalid.clone(),
        }
    }
}

impl<R> fmt::Debug for Match<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("input", &self.input)
            .field("clauses", &self.len)
            .field("invalid", &self.invalid)
            .finish()
    }
}

#[cfg(test)]
mod tests;
