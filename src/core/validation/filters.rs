//! Reusable field filters
//!
//! Filters transform a field value before its checks run. The filtered value
//! is what reaches the store.

use serde_json::Value;

/// Boxed filter as stored in a rule table
pub type Filter = Box<dyn Fn(Value) -> Value + Send + Sync>;

/// Filter: trim whitespace from string
pub fn trim() -> impl Fn(Value) -> Value + Send + Sync + Clone {
    |value: Value| match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        other => other,
    }
}

/// Filter: turn a whole-valued float such as `5.0` into the integer `5`
///
/// Fractional or out-of-range numbers pass through unchanged for the checks
/// to reject.
pub fn whole_number() -> impl Fn(Value) -> Value + Send + Sync + Clone {
    |value: Value| match value.as_f64() {
        Some(f) if value.is_f64() && f.fract() == 0.0 && f.abs() < 9.0e15 => {
            Value::from(f as i64)
        }
        _ => value,
    }
}
