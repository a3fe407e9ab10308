//! Resource descriptors
//!
//! A resource ties a collection name and a route path to its whitelisted
//! payload types and to the messages returned by each operation.

use crate::core::validation::ValidatedPayload;
use serde::Serialize;

/// Messages returned by the five resource operations
#[derive(Debug, Clone, Copy)]
pub struct ResourceMessages {
    /// Body message on successful create
    pub created: &'static str,
    /// Body message when no document matches
    pub not_found: &'static str,
    /// Body message when a replace matched but changed nothing
    pub no_changes: &'static str,
    /// Reported with the failure text when listing fails
    pub list_failed: &'static str,
    pub get_failed: &'static str,
    pub create_failed: &'static str,
    pub replace_failed: &'static str,
    pub delete_failed: &'static str,
    /// Field message for a malformed `{id}` parameter
    pub invalid_id: &'static str,
}

/// A document collection exposed as a REST resource
pub trait Resource: Send + Sync + 'static {
    /// Whitelisted fields accepted on create
    type New: ValidatedPayload + Serialize + Send;

    /// Whitelisted fields accepted on replace; absent fields stay absent
    type Changes: ValidatedPayload + Serialize + Send;

    /// Store collection name
    const COLLECTION: &'static str;

    /// Route prefix, e.g. `/temples`
    const PATH: &'static str;

    const MESSAGES: ResourceMessages;
}
