//! Sift Match - structural pattern matching over runtime values.
//!
//! This crate provides:
//! - The pattern tree (`Pattern`) and its construction functions (`p`)
//! - The matcher protocol (`Matcher`) and the built-in matcher kinds
//! - The recursive evaluator (`match_pattern`) with selection collection
//! - The selection key analyzer (`collect_selection_keys`, `validate_pattern`)
//! - The clause sequencer (`match_value`) and the lookup helper (`is_matching`)
//!
//! # Example
//!
//! ```text
//! use sift_match::{match_value, p, record};
//!
//! let names = match_value(response)
//!     .with(
//!         record! { "status" => "success", "data" => p::array_of(record! { "name" => p::select() }) },
//!         |names, _| names.into_value(),
//!     )
//!     .otherwise(|_, _| Value::list(vec![]))?;
//! ```
//!
//! # Selections
//!
//! A clause handler receives a [`Selected`]:
//! - `Input` when the pattern selects nothing;
//! - `Anonymous` for a single `p::select()`;
//! - `Named` for `p::select_as(..)` keys.
//!
//! Selections inside `array`/`set`/`map` combinators arrive as lists.

mod builder;
mod errors;
mod evaluator;
mod keys;
mod lookup;
mod matcher;
pub mod matchers;
pub mod p;
mod pattern;
mod selection;
mod stack;

use std::sync::Once;

pub use builder::{match_value, Match};
pub use errors::{MatchError, NonExhaustiveError, PatternError};
pub use evaluator::{evaluate, match_pattern};
pub use keys::{collect_selection_keys, selection_shape, validate_pattern, SelectionShape};
pub use lookup::{is_matching, is_matching_fn};
pub use matcher::{MatchResult, Matcher};
pub use pattern::Pattern;
pub use selection::{Selected, SelectionKey, Selections};
pub use sift_value::Value;
pub use stack::ensure_sufficient_stack;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=sift_match=debug` or `RUST_LOG=sift_match=trace`. A global
/// subscriber installed earlier by the host program is left in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
                .ok();
        }
    });
}
