//! Validation and filtering system
//!
//! Route parameters and request bodies are checked against declarative rule
//! tables before a request reaches the data layer.

pub mod config;
pub mod extractor;
pub mod filters;
pub mod validators;

pub use config::{FieldRule, Presence, ValidationConfig};
pub use extractor::{ValidId, ValidatedJson, ValidatedPayload, parse_id};
