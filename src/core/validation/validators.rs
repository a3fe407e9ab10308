//! Reusable field validators
//!
//! Each validator is a predicate over a JSON value. The message reported on
//! failure is declared next to the rule, not inside the validator.

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Boxed validator as stored in a rule table
pub type Validator = Box<dyn Fn(&Value) -> bool + Send + Sync>;

/// Validator: value is present and not an empty string
pub fn not_empty() -> impl Fn(&Value) -> bool + Send + Sync + Clone {
    |value: &Value| match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Validator: value is a JSON string
pub fn is_string() -> impl Fn(&Value) -> bool + Send + Sync + Clone {
    |value: &Value| value.is_string()
}

/// Validator: string has at least `min` characters
pub fn min_chars(min: usize) -> impl Fn(&Value) -> bool + Send + Sync + Clone {
    move |value: &Value| value.as_str().is_some_and(|s| s.chars().count() >= min)
}

/// Validator: value is a JSON integer greater than or equal to zero
pub fn non_negative_integer() -> impl Fn(&Value) -> bool + Send + Sync + Clone {
    |value: &Value| value.as_i64().is_some_and(|n| n >= 0)
}

/// Validator: value is a JSON boolean
pub fn is_boolean() -> impl Fn(&Value) -> bool + Send + Sync + Clone {
    |value: &Value| value.is_boolean()
}

/// Validator: string is a calendar date (`YYYY-MM-DD`) or an RFC 3339 timestamp
pub fn date_like() -> impl Fn(&Value) -> bool + Send + Sync + Clone {
    |value: &Value| {
        value.as_str().is_some_and(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
                || DateTime::parse_from_rfc3339(s).is_ok()
        })
    }
}

/// Check a raw string against the 24-character hex object identifier format
pub fn is_object_id(candidate: &str) -> bool {
    static OBJECT_ID_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = OBJECT_ID_REGEX.get_or_init(|| {
        Regex::new(r"^[0-9a-fA-F]{24}$").expect("object id pattern is valid")
    });
    regex.is_match(candidate)
}
