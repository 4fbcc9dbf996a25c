//! Positional and numeric answer matching

use crate::normalize::{
    casefold, is_numeric_word, normalize_number, strip_numeric_punctuation, strip_punctuation,
};
use crate::types::{Location, MatchConfig, MatchResult};

/// Normalize `value` and `target` according to `config` and compare them.
///
/// The returned [`MatchResult::normalized_value`] is the trimmed value in
/// text mode and the extracted, canonicalized number in numeric mode. The
/// function is total: malformed numbers fall back to text comparison.
///
/// ```rust
/// use strmatch::{inspect_match, Location, MatchConfig};
///
/// let config = MatchConfig::numeric();
/// let result = inspect_match("The answer is 3.14", "3.14", &config);
/// assert!(result.matched);
/// assert_eq!(result.normalized_value, "3.14");
///
/// let config = MatchConfig::default().with_location(Location::Exact);
/// assert!(inspect_match("Yes!!!", "yes", &config).matched);
/// ```
pub fn inspect_match(value: &str, target: &str, config: &MatchConfig) -> MatchResult {
    let value = value.trim();
    let target = target.trim();

    let mut answer = value.to_string();

    let (mut v, mut t) = if config.ignore_case {
        (casefold(value), casefold(target))
    } else {
        (value.to_string(), target.to_string())
    };

    if config.numeric {
        let stripped = strip_numeric_punctuation(&v);
        t = normalize_number(&strip_numeric_punctuation(&t), config.precision);
        v = match config.location {
            Location::Begin => first_number_normalized(stripped.split(' '), config.precision),
            Location::End | Location::Any => {
                first_number_normalized(stripped.split(' ').rev(), config.precision)
            }
            Location::Exact => normalize_number(&stripped, config.precision),
        };
        answer = v.clone();
    } else if config.ignore_punctuation {
        v = strip_punctuation(&v).to_string();
        t = strip_punctuation(&t).to_string();
    }

    let matched = config.location.compare(&v, &t);

    tracing::trace!(
        location = %config.location,
        numeric = config.numeric,
        value = %v,
        target = %t,
        matched,
        "inspected match"
    );

    MatchResult {
        normalized_value: answer,
        matched,
    }
}

/// Normalize the first numeric-looking word, or the first word if none is.
fn first_number_normalized<'a>(
    mut words: impl Iterator<Item = &'a str>,
    precision: usize,
) -> String {
    let first = words.next().unwrap_or_default();
    let number = if is_numeric_word(first) {
        first
    } else {
        words.find(|w| is_numeric_word(w)).unwrap_or(first)
    };
    normalize_number(number, precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(location: Location) -> MatchConfig {
        MatchConfig::numeric().with_location(location)
    }

    fn text(location: Location) -> MatchConfig {
        MatchConfig::default().with_location(location)
    }

    #[test]
    fn test_exact_numeric() {
        let result = inspect_match("42", "42", &numeric(Location::Exact));
        assert_eq!(result.normalized_value, "42");
        assert!(result.matched);
    }

    #[test]
    fn test_end_numeric_extracts_last_number() {
        let config = numeric(Location::End);
        assert!(inspect_match("The answer is 3.14", "3.14", &config).matched);
        assert!(!inspect_match("The answer is 3.14", "3.1", &config).matched);

        let result = inspect_match("First 2 then 7 apples", "7", &config);
        assert_eq!(result.normalized_value, "7");
        assert!(result.matched);
    }

    #[test]
    fn test_begin_numeric_extracts_first_number() {
        let config = numeric(Location::Begin);
        let result = inspect_match("I count 12 of 40.", "12.0", &config);
        assert_eq!(result.normalized_value, "12");
        assert!(result.matched);
    }

    #[test]
    fn test_numeric_falls_back_to_first_word() {
        let result = inspect_match("no digits here", "5", &numeric(Location::Begin));
        assert_eq!(result.normalized_value, "no");
        assert!(!result.matched);

        // Reversed word order, so the fallback is the last word.
        let result = inspect_match("no digits here", "here", &numeric(Location::End));
        assert_eq!(result.normalized_value, "here");
        assert!(result.matched);
    }

    #[test]
    fn test_numeric_strips_currency_and_commas() {
        let result = inspect_match("$1,234.00", "1234", &numeric(Location::Exact));
        assert_eq!(result.normalized_value, "1234");
        assert!(result.matched);

        assert!(inspect_match("It costs £20.", "20", &numeric(Location::End)).matched);
        assert!(inspect_match("Total: €1,000,000", "1000000", &numeric(Location::End)).matched);
    }

    #[test]
    fn test_numeric_significant_figures() {
        assert!(inspect_match("1.00", "1", &numeric(Location::Exact)).matched);
        assert!(inspect_match("3.141592", "3.14159", &numeric(Location::Exact)).matched);
        assert!(!inspect_match("3.1415", "3.1416", &numeric(Location::Exact)).matched);
    }

    #[test]
    fn test_numeric_malformed_token_compares_as_text() {
        let result = inspect_match("version 1.2.3", "1.2.3", &numeric(Location::End));
        assert_eq!(result.normalized_value, "1.2.3");
        assert!(result.matched);
    }

    #[test]
    fn test_numeric_negative_numbers_are_opaque() {
        let result = inspect_match("It dropped to -5", "-5", &numeric(Location::End));
        assert_eq!(result.normalized_value, "-5");
        assert!(result.matched);
    }

    #[test]
    fn test_numeric_any_extracts_like_end() {
        let result = inspect_match("between 3 and 45", "4", &numeric(Location::Any));
        assert_eq!(result.normalized_value, "45");
        assert!(result.matched);

        assert!(!inspect_match("between 3 and 45", "3", &numeric(Location::Any)).matched);
    }

    #[test]
    fn test_numeric_returns_normalized_answer_not_original() {
        let result = inspect_match("  Answer: 2.50.  ", "2.5", &numeric(Location::End));
        assert_eq!(result.normalized_value, "2.5");
        assert!(result.matched);
    }

    #[test]
    fn test_text_punctuation_trim() {
        let result = inspect_match("Yes!!!", "yes", &text(Location::Exact));
        assert_eq!(result.normalized_value, "Yes!!!");
        assert!(result.matched);
    }

    #[test]
    fn test_text_keeps_interior_punctuation() {
        assert!(!inspect_match("a, b", "a b", &text(Location::Exact)).matched);
        assert!(inspect_match("\"Hello, world.\"", "hello, world", &text(Location::Exact)).matched);
    }

    #[test]
    fn test_text_punctuation_kept_when_disabled() {
        let config = text(Location::Exact).with_ignore_punctuation(false);
        assert!(!inspect_match("Yes!!!", "yes", &config).matched);
        assert!(inspect_match("Yes!!!", "yes!!!", &config).matched);
    }

    #[test]
    fn test_text_case_sensitive() {
        let config = text(Location::Exact).with_ignore_case(false);
        assert!(!inspect_match("Paris", "paris", &config).matched);
        assert!(inspect_match("Paris", "Paris", &config).matched);
    }

    #[test]
    fn test_text_unicode_case_folding() {
        assert!(inspect_match("STRASSE", "straße", &text(Location::Exact)).matched);
    }

    #[test]
    fn test_text_locations() {
        assert!(inspect_match("The capital is Paris.", "Paris", &text(Location::Any)).matched);
        assert!(inspect_match("The capital is Paris.", "Paris", &text(Location::End)).matched);
        assert!(inspect_match("(A) is correct", "a", &text(Location::Begin)).matched);
        assert!(!inspect_match("The capital is Paris.", "Paris", &text(Location::Begin)).matched);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(inspect_match("", "", &text(Location::Exact)).matched);
        assert!(!inspect_match("", "x", &text(Location::Any)).matched);
        assert!(inspect_match("", "", &numeric(Location::End)).matched);
        assert_eq!(inspect_match("", "", &numeric(Location::End)).normalized_value, "");
    }

    #[test]
    fn test_whitespace_only_words_in_numeric_mode() {
        let result = inspect_match("7  ", "7", &numeric(Location::End));
        assert!(result.matched);

        // Double spaces produce empty words, which are skipped as non-numeric.
        let result = inspect_match("7  apples", "7", &numeric(Location::End));
        assert_eq!(result.normalized_value, "7");
        assert!(result.matched);
    }
}
