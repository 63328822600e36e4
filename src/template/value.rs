//! Interpolated values

use std::fmt;

use serde::Deserialize;

/// A value interpolated into a template or passed as a property
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    String(String),
    Null,
}

impl Value {
    /// Name of the value's type as used in property declarations
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Null => "null",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            // Whole numbers print without a trailing ".0"
            Value::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Null => Ok(()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_number_without_fraction() {
        assert_eq!(Value::from(3i64).to_string(), "3");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_display_null_is_empty() {
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn test_deserialize_untagged() {
        #[derive(Deserialize)]
        struct Bag {
            title: Value,
            count: Value,
            enabled: Value,
        }
        let bag: Bag = toml::from_str("title = \"Home\"\ncount = 4\nenabled = true").unwrap();
        assert_eq!(bag.title, Value::from("Home"));
        assert_eq!(bag.count, Value::Number(4.0));
        assert_eq!(bag.enabled, Value::Bool(true));
    }
}
