//! Reference targets

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One reference answer, or several acceptable ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target {
    One(String),
    Many(Vec<String>),
}

impl Target {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            Target::One(s) => std::slice::from_ref(s),
            Target::Many(v) => v,
        };
        items.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Target::Many(v) if v.is_empty())
    }

    /// Build a target from an arbitrary JSON value.
    ///
    /// Arrays become [`Target::Many`]; any other value is stringified.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Array(items) => Target::Many(items.iter().map(stringify).collect()),
            other => Target::One(stringify(other)),
        }
    }
}

/// Render a JSON scalar the way dataset targets are usually written
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

impl From<&str> for Target {
    fn from(s: &str) -> Self {
        Target::One(s.to_string())
    }
}

impl From<String> for Target {
    fn from(s: String) -> Self {
        Target::One(s)
    }
}

impl From<Vec<String>> for Target {
    fn from(v: Vec<String>) -> Self {
        Target::Many(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_iter() {
        assert_eq!(Target::from("a").iter().collect::<Vec<_>>(), vec!["a"]);
        let many = Target::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(many.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_is_empty() {
        assert!(Target::Many(vec![]).is_empty());
        assert!(!Target::from("").is_empty());
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(Target::from_json(&json!("Paris")), Target::from("Paris"));
        assert_eq!(Target::from_json(&json!(18)), Target::from("18"));
        assert_eq!(Target::from_json(&json!(2.5)), Target::from("2.5"));
        assert_eq!(Target::from_json(&json!(true)), Target::from("True"));
        assert_eq!(Target::from_json(&json!(null)), Target::from("None"));
    }

    #[test]
    fn test_from_json_array() {
        let target = Target::from_json(&json!(["USA", 1776]));
        assert_eq!(target, Target::from(vec!["USA".to_string(), "1776".to_string()]));
    }

    #[test]
    fn test_deserialize_untagged() {
        let one: Target = serde_json::from_str(r#""yes""#).unwrap();
        assert_eq!(one, Target::from("yes"));
        let many: Target = serde_json::from_str(r#"["yes", "y"]"#).unwrap();
        assert_eq!(many.iter().count(), 2);
    }
}
