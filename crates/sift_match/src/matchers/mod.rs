//! Built-in matcher kinds.
//!
//! `MatcherNode` is a closed set of variants, one per built-in kind, plus
//! `Custom` for user-supplied matchers. It implements [`Matcher`] by
//! delegating to the variant, so the evaluator sees a single protocol.

mod collection;
mod guard;
mod instance;
mod logic;
mod select;
mod wildcard;

use std::sync::Arc;

use sift_value::Value;

use crate::keys::SelectionShape;
use crate::matcher::{MatchResult, Matcher};

pub use collection::{ArrayOf, MapOf, SetOf};
pub(crate) use collection::probe_elements;
pub use guard::Guard;
pub use instance::InstanceOf;
pub use logic::{And, Not, Optional, Or};
pub use select::Select;
pub use wildcard::{
    BigIntCheck, BigIntPattern, NumberCheck, NumberPattern, Refined, StringCheck, StringPattern,
    WildcardKind,
};

/// A matcher node of a pattern tree.
#[derive(Clone, Debug)]
pub enum MatcherNode {
    /// Type wildcard (`any`, `string`, `nullish`, ...).
    Wildcard(WildcardKind),
    /// Type wildcard with refinements (`string().starts_with(..)`).
    Refined(Refined),
    Guard(Guard),
    Not(Not),
    And(And),
    Or(Or),
    Optional(Optional),
    Select(Select),
    Array(ArrayOf),
    Set(SetOf),
    Map(MapOf),
    InstanceOf(InstanceOf),
    /// User-supplied matcher.
    Custom(Arc<dyn Matcher>),
}

impl MatcherNode {
    fn as_matcher(&self) -> &dyn Matcher {
        match self {
            MatcherNode::Wildcard(m) => m,
            MatcherNode::Refined(m) => m,
            MatcherNode::Guard(m) => m,
            MatcherNode::Not(m) => m,
            MatcherNode::And(m) => m,
            MatcherNode::Or(m) => m,
            MatcherNode::Optional(m) => m,
            MatcherNode::Select(m) => m,
            MatcherNode::Array(m) => m,
            MatcherNode::Set(m) => m,
            MatcherNode::Map(m) => m,
            MatcherNode::InstanceOf(m) => m,
            MatcherNode::Custom(m) => &**m,
        }
    }
}

impl Matcher for MatcherNode {
    fn name(&self) -> &'static str {
        self.as_matcher().name()
    }

    fn probe(&self, value: &Value) -> MatchResult {
        self.as_matcher().probe(value)
    }

    fn selection_shape(&self) -> SelectionShape {
        self.as_matcher().selection_shape()
    }

    fn is_optional(&self) -> bool {
        self.as_matcher().is_optional()
    }
}
