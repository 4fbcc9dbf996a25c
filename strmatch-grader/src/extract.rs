//! Final-answer extraction from chain-of-thought responses

use regex::Regex;

use crate::config::ConfigError;

/// Matches the closing sentence of GSM8K-style reasoning
pub const DEFAULT_ANSWER_PATTERN: &str = r"The answer is \$?(-?[\d,\.]+)";

/// Graded in place of a response with no extractable answer
pub const NO_ANSWER: &str = "NA";

/// Pulls the final numeric answer out of a free-text response
#[derive(Debug, Clone)]
pub struct AnswerExtractor {
    pattern: Regex,
}

impl AnswerExtractor {
    /// Compile an extractor; the pattern needs at least one capture group.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let pattern = Regex::new(pattern).map_err(|e| ConfigError::Pattern(e.to_string()))?;
        if pattern.captures_len() < 2 {
            return Err(ConfigError::Pattern(format!(
                "'{}' has no capture group",
                pattern.as_str()
            )));
        }
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Return the last captured answer with commas and one trailing `.` removed.
    pub fn extract(&self, response: &str) -> Option<String> {
        let last = self
            .pattern
            .captures_iter(response)
            .filter_map(|caps| caps.get(1))
            .last()?;

        let mut answer = last.as_str().replace(',', "");
        if answer.ends_with('.') {
            answer.pop();
        }
        Some(answer)
    }
}

impl Default for AnswerExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_ANSWER_PATTERN).expect("default answer pattern is valid")
    }
}
