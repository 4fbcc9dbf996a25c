//! Matching configuration and result types

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::normalize::DEFAULT_PRECISION;

/// Where the target has to occur within the value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Location {
    /// Value starts with the target
    Begin,
    /// Value ends with the target
    #[default]
    End,
    /// Target occurs anywhere in the value
    Any,
    /// Value equals the target
    Exact,
}

impl Location {
    pub fn all() -> Vec<Location> {
        vec![Location::Begin, Location::End, Location::Any, Location::Exact]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Begin => "begin",
            Location::End => "end",
            Location::Any => "any",
            Location::Exact => "exact",
        }
    }

    /// Apply this location's comparison rule to already normalized strings.
    pub fn compare(self, value: &str, target: &str) -> bool {
        match self {
            Location::Begin => value.starts_with(target),
            Location::End => value.ends_with(target),
            Location::Exact => value == target,
            Location::Any => value.contains(target),
        }
    }
}

/// Unrecognised names fall back to [`Location::Any`].
impl From<&str> for Location {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "begin" => Location::Begin,
            "end" => Location::End,
            "exact" => Location::Exact,
            _ => Location::Any,
        }
    }
}

impl FromStr for Location {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Location::from(s))
    }
}

impl From<String> for Location {
    fn from(s: String) -> Self {
        Location::from(s.as_str())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options controlling how a value and a target are normalized and compared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    #[serde(default)]
    pub location: Location,
    #[serde(default = "default_true")]
    pub ignore_case: bool,
    /// Only consulted outside numeric mode
    #[serde(default = "default_true")]
    pub ignore_punctuation: bool,
    #[serde(default)]
    pub numeric: bool,
    /// Significant digits for number normalization
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_true() -> bool { true }
fn default_precision() -> usize { DEFAULT_PRECISION }

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            location: Location::default(),
            ignore_case: true,
            ignore_punctuation: true,
            numeric: false,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl MatchConfig {
    /// Default options with numeric mode switched on
    pub fn numeric() -> Self {
        Self {
            numeric: true,
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn with_ignore_punctuation(mut self, ignore_punctuation: bool) -> Self {
        self.ignore_punctuation = ignore_punctuation;
        self
    }

    pub fn with_numeric(mut self, numeric: bool) -> Self {
        self.numeric = numeric;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

/// Outcome of a single comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// What was actually compared on the value side, for auditing
    pub normalized_value: String,
    pub matched: bool,
}

impl From<MatchResult> for (String, bool) {
    fn from(result: MatchResult) -> Self {
        (result.normalized_value, result.matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.location, Location::End);
        assert!(config.ignore_case);
        assert!(config.ignore_punctuation);
        assert!(!config.numeric);
        assert_eq!(config.precision, 5);
    }

    #[test]
    fn test_location_parse_is_lenient() {
        assert_eq!("begin".parse::<Location>(), Ok(Location::Begin));
        assert_eq!(Location::from("END"), Location::End);
        assert_eq!(Location::from("exact"), Location::Exact);
        assert_eq!(Location::from("any"), Location::Any);
        assert_eq!(Location::from("middle"), Location::Any);
        assert_eq!(Location::from(""), Location::Any);
    }

    #[test]
    fn test_location_round_trips_through_names() {
        for location in Location::all() {
            assert_eq!(Location::from(location.as_str()), location);
            assert_eq!(location.to_string(), location.as_str());
        }
    }

    #[test]
    fn test_compare() {
        assert!(Location::Begin.compare("42 apples", "42"));
        assert!(Location::End.compare("answer: 42", "42"));
        assert!(Location::Any.compare("is 42 or", "42"));
        assert!(Location::Exact.compare("42", "42"));
        assert!(!Location::Exact.compare("42 ", "42"));
        assert!(Location::Any.compare("anything", ""));
    }

    #[test]
    fn test_config_deserialize_with_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{"numeric": true}"#).unwrap();
        assert_eq!(config, MatchConfig::numeric());

        let config: MatchConfig =
            serde_json::from_str(r#"{"location": "somewhere", "ignore_case": false}"#).unwrap();
        assert_eq!(config.location, Location::Any);
        assert!(!config.ignore_case);
    }

    #[test]
    fn test_config_serialize_uses_lowercase_location() {
        let config = MatchConfig::default().with_location(Location::Exact);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["location"], "exact");
    }

    #[test]
    fn test_result_into_pair() {
        let result = MatchResult {
            normalized_value: "42".to_string(),
            matched: true,
        };
        let (value, matched): (String, bool) = result.into();
        assert_eq!(value, "42");
        assert!(matched);
    }
}
