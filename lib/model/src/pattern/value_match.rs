use crate::TermError;
use regex::Regex;

/// A condition on the value of a term.
///
/// The numeric conditions only hold for values that parse as a floating-point number. A value
/// like `"abc"` is neither greater nor less than any number.
#[derive(Clone, Debug)]
pub enum ValueMatch {
    Equals(String),
    NotEquals(String),
    StartsWith(String),
    EndsWith(String),
    Contains(String),
    Regex(Regex),
    Greater(f64),
    GreaterOrEqual(f64),
    Less(f64),
    LessOrEqual(f64),
}

impl ValueMatch {
    /// Creates a [ValueMatch::Regex] from a regular expression.
    pub fn regex(pattern: &str) -> Result<Self, TermError> {
        Ok(Self::Regex(Regex::new(pattern)?))
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            ValueMatch::Equals(expected) => value == expected,
            ValueMatch::NotEquals(expected) => value != expected,
            ValueMatch::StartsWith(prefix) => value.starts_with(prefix.as_str()),
            ValueMatch::EndsWith(suffix) => value.ends_with(suffix.as_str()),
            ValueMatch::Contains(needle) => value.contains(needle.as_str()),
            ValueMatch::Regex(regex) => regex.is_match(value),
            ValueMatch::Greater(bound) => parse_number(value).is_some_and(|v| v > *bound),
            ValueMatch::GreaterOrEqual(bound) => parse_number(value).is_some_and(|v| v >= *bound),
            ValueMatch::Less(bound) => parse_number(value).is_some_and(|v| v < *bound),
            ValueMatch::LessOrEqual(bound) => parse_number(value).is_some_and(|v| v <= *bound),
        }
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

impl From<&str> for ValueMatch {
    fn from(value: &str) -> Self {
        Self::Equals(value.to_owned())
    }
}

impl From<String> for ValueMatch {
    fn from(value: String) -> Self {
        Self::Equals(value)
    }
}
