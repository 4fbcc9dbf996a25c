//! Per-item answer grading built on `strmatch`
//!
//! This crate is the caller side of the matching engine: it loads
//! configuration, pulls final answers out of chain-of-thought responses,
//! and grades one response against one or more reference targets.
//!
//! # Example
//!
//! ```rust
//! use strmatch_grader::{ExactStrMatch, Metric, Target};
//!
//! let metric = ExactStrMatch::new();
//! let grade = metric.grade("2 + 3 = 5. The answer is 5.", &Target::from("5"));
//! assert!(grade.matched);
//! ```

pub mod config;
pub mod extract;
pub mod grading;
pub mod target;

pub use config::{Config, ConfigError, ExactConfig};
pub use extract::{AnswerExtractor, DEFAULT_ANSWER_PATTERN, NO_ANSWER};
pub use grading::{ExactStrMatch, ItemGrade, Metric, RelaxStrMatch};
pub use target::Target;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::{Config, ConfigError, ExactConfig};
    pub use crate::extract::AnswerExtractor;
    pub use crate::grading::{ExactStrMatch, ItemGrade, Metric, RelaxStrMatch};
    pub use crate::target::Target;
    pub use strmatch::{inspect_match, Location, MatchConfig, MatchResult};
}
