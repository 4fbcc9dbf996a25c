//! strmatch - deterministic answer matching for grading model outputs
//!
//! Turns a raw model response and a reference answer into comparable
//! canonical forms and decides whether they match.
//!
//! Two modes are supported:
//!
//! - **Text**: optional case folding and two-ended punctuation trimming, then
//!   a positional comparison (`begin`, `end`, `any`, `exact`).
//! - **Numeric**: currency symbols and sentence periods are stripped, a
//!   single number is extracted from the response, and both sides are
//!   reformatted to a fixed count of significant digits.
//!
//! Everything here is pure and thread-safe; there is no I/O and no shared
//! mutable state.
//!
//! # Example
//!
//! ```rust
//! use strmatch::{inspect_match, Location, MatchConfig};
//!
//! let config = MatchConfig::numeric().with_location(Location::Exact);
//! let result = inspect_match("$1,234.00", "1234", &config);
//!
//! assert_eq!(result.normalized_value, "1234");
//! assert!(result.matched);
//! ```

mod matcher;
mod normalize;
mod relaxed;
mod types;

pub use matcher::inspect_match;
pub use normalize::{
    casefold, format_significant, is_numeric_word, normalize_number, strip_numeric_punctuation,
    strip_punctuation, DEFAULT_PRECISION,
};
pub use relaxed::{relaxed_match, relaxed_match_any, relaxed_normalize};
pub use types::{Location, MatchConfig, MatchResult};
