//! One-shot boolean tests.

use std::sync::Arc;

use sift_value::Value;

use crate::evaluator::match_pattern;
use crate::pattern::Pattern;
use crate::selection::Selections;

/// Whether `value` matches `pattern`. Selections are discarded.
pub fn is_matching(pattern: &Pattern, value: &Value) -> bool {
    let mut discarded = Selections::new();
    match_pattern(pattern, value, &mut discarded)
}

/// A reusable predicate for `pattern`.
///
/// ```text
/// let is_error = is_matching_fn(record! { "type" => "error" });
/// let errors: Vec<_> = events.iter().filter(|e| is_error(e)).collect();
/// ```
pub fn is_matching_fn(
    pattern: impl Into<Pattern>,
) -> impl Fn(&Value) -> bool + Clone + Send + Sync {
    let pattern = Arc::new(pattern.into());
    move |value: &Value| is_matching(&pattern, value)
}
