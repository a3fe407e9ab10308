//! Declarative validation tables
//!
//! A [`ValidationConfig`] is an ordered list of field rules, written as a
//! chain:
//!
//! ```rust,ignore
//! ValidationConfig::new()
//!     .required("temple_name")
//!     .check(not_empty(), "Temple name is required")
//!     .check(min_chars(3), "Temple name must be at least 3 characters")
//!     .optional("size")
//!     .check(is_string(), "Size must be a string");
//! ```
//!
//! `filter` and `check` attach to the most recently declared field.

use super::filters::Filter;
use super::validators::Validator;
use crate::core::error::FieldError;
use serde_json::{Map, Value};

/// Whether a field must be supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Absent values are checked as `null`
    Required,
    /// Absent values skip every check
    Optional,
}

struct Check {
    validator: Validator,
    message: &'static str,
}

/// Rules for a single field
pub struct FieldRule {
    field: &'static str,
    presence: Presence,
    filters: Vec<Filter>,
    checks: Vec<Check>,
}

impl FieldRule {
    fn new(field: &'static str, presence: Presence) -> Self {
        Self {
            field,
            presence,
            filters: Vec::new(),
            checks: Vec::new(),
        }
    }

    /// Run filters then checks; stops at the first failed check
    fn apply(&self, value: Value) -> Result<Value, &'static str> {
        let value = self.filters.iter().fold(value, |v, filter| filter(v));
        match self.checks.iter().find(|check| !(check.validator)(&value)) {
            Some(failed) => Err(failed.message),
            None => Ok(value),
        }
    }
}

/// Ordered rule table for one payload shape
#[derive(Default)]
pub struct ValidationConfig {
    rules: Vec<FieldRule>,
    require_any: Option<&'static str>,
}

impl ValidationConfig {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a required field
    pub fn required(mut self, field: &'static str) -> Self {
        self.rules.push(FieldRule::new(field, Presence::Required));
        self
    }

    /// Declare an optional field
    pub fn optional(mut self, field: &'static str) -> Self {
        self.rules.push(FieldRule::new(field, Presence::Optional));
        self
    }

    /// Attach a filter to the last declared field
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        if let Some(rule) = self.rules.last_mut() {
            rule.filters.push(Box::new(filter));
        }
        self
    }

    /// Attach a check to the last declared field
    pub fn check<V>(mut self, validator: V, message: &'static str) -> Self
    where
        V: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        if let Some(rule) = self.rules.last_mut() {
            rule.checks.push(Check {
                validator: Box::new(validator),
                message,
            });
        }
        self
    }

    /// Reject payloads that supply none of the declared fields
    pub fn require_any(mut self, message: &'static str) -> Self {
        self.require_any = Some(message);
        self
    }

    /// Declared rules, in order
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Validate a payload and return only the declared fields, filtered
    ///
    /// Failures from every field are accumulated; each field reports at most
    /// its first failed check.
    pub fn validate_and_filter(&self, payload: Value) -> Result<Value, Vec<FieldError>> {
        let Value::Object(mut input) = payload else {
            return Err(vec![FieldError::new(
                "body",
                "Request body must be a JSON object",
            )]);
        };

        let mut output = Map::new();
        let mut errors = Vec::new();

        for rule in &self.rules {
            let value = match (input.remove(rule.field), rule.presence) {
                (Some(value), _) => value,
                (None, Presence::Required) => Value::Null,
                (None, Presence::Optional) => continue,
            };

            match rule.apply(value) {
                Ok(filtered) => {
                    output.insert(rule.field.to_string(), filtered);
                }
                Err(message) => errors.push(FieldError::new(rule.field, message)),
            }
        }

        if errors.is_empty()
            && output.is_empty()
            && let Some(message) = self.require_any
        {
            errors.push(FieldError::new("body", message));
        }

        if errors.is_empty() {
            Ok(Value::Object(output))
        } else {
            Err(errors)
        }
    }
}
