//! Per-item grading metrics
//!
//! Each metric grades one response against one [`Target`]. Combining grades
//! across a dataset is left to the caller.

use serde::{Deserialize, Serialize};
use strmatch::{inspect_match, relaxed_match_any, relaxed_normalize, MatchConfig};

use crate::config::{ConfigError, ExactConfig};
use crate::extract::{AnswerExtractor, NO_ANSWER};
use crate::target::Target;

/// Grade for a single response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemGrade {
    pub metric: String,
    /// What was compared on the response side
    pub normalized_value: String,
    pub matched: bool,
    /// The target that matched, when one did
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_target: Option<String>,
}

/// A grading rule applied to one response at a time
pub trait Metric: Send + Sync {
    fn id(&self) -> &str;

    fn description(&self) -> &str;

    fn grade(&self, response: &str, target: &Target) -> ItemGrade;
}

/// Extracts the final answer, then compares it numerically to each target
#[derive(Debug, Clone)]
pub struct ExactStrMatch {
    extractor: AnswerExtractor,
    config: MatchConfig,
    fallback: String,
}

impl ExactStrMatch {
    pub const ID: &'static str = "exactstrmatch";

    pub fn new() -> Self {
        Self {
            extractor: AnswerExtractor::default(),
            config: MatchConfig::numeric(),
            fallback: NO_ANSWER.to_string(),
        }
    }

    pub fn from_config(config: &ExactConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            extractor: AnswerExtractor::new(&config.answer_pattern)?,
            config: config.match_config(),
            fallback: config.fallback.clone(),
        })
    }

    pub fn match_config(&self) -> &MatchConfig {
        &self.config
    }
}

impl Default for ExactStrMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for ExactStrMatch {
    fn id(&self) -> &str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Extracts the final answer and compares it numerically with one or more targets"
    }

    fn grade(&self, response: &str, target: &Target) -> ItemGrade {
        if target.is_empty() {
            tracing::warn!("Grading against an empty target list; nothing can match");
        }
        let answer = self.extractor.extract(response).unwrap_or_else(|| {
            tracing::debug!("No final answer found, grading '{}'", self.fallback);
            self.fallback.clone()
        });

        let mut normalized = None;
        for candidate in target.iter() {
            let result = inspect_match(&answer, candidate, &self.config);
            if result.matched {
                return ItemGrade {
                    metric: Self::ID.to_string(),
                    normalized_value: result.normalized_value,
                    matched: true,
                    matched_target: Some(candidate.to_string()),
                };
            }
            normalized.get_or_insert(result.normalized_value);
        }

        ItemGrade {
            metric: Self::ID.to_string(),
            normalized_value: normalized.unwrap_or(answer),
            matched: false,
            matched_target: None,
        }
    }
}

/// Compares responses and targets after dropping symbols, spaces and case
#[derive(Debug, Clone, Copy, Default)]
pub struct RelaxStrMatch;

impl RelaxStrMatch {
    pub const ID: &'static str = "relaxstrmatch";
}

impl Metric for RelaxStrMatch {
    fn id(&self) -> &str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Removes symbols and spaces before comparing the response with the targets"
    }

    fn grade(&self, response: &str, target: &Target) -> ItemGrade {
        if target.is_empty() {
            tracing::warn!("Grading against an empty target list; nothing can match");
        }
        let matched_target = relaxed_match_any(response, target.iter()).map(str::to_string);

        ItemGrade {
            metric: Self::ID.to_string(),
            normalized_value: relaxed_normalize(response),
            matched: matched_target.is_some(),
            matched_target,
        }
    }
}
