//! Document store gateway traits
//!
//! The handlers never talk to a database driver directly. They receive a
//! [`DocumentStore`] at construction time and ask it for named collections,
//! so the MongoDB backend and the in-memory backend are interchangeable.

use async_trait::async_trait;
use mongodb::bson::{Document, oid::ObjectId};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by a document store backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// The backend rejected or failed the operation
    #[error("Backend error: {0}")]
    Backend(String),

    /// A value could not be converted to or from a document
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The write was not acknowledged by the backend
    #[error("{0}")]
    Unacknowledged(String),
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<mongodb::bson::ser::Error> for StoreError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result metadata of `insert_one`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    /// Whether the backend confirmed the write
    pub acknowledged: bool,
    /// Identifier assigned to the new document
    pub inserted_id: ObjectId,
}

/// Result metadata of `replace_fields`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaceOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Result metadata of `delete_by_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

/// Handle to a single named collection
///
/// Every method maps to exactly one backend call. Outcome classification
/// (found, missing, unchanged) is derived from the returned metadata, never
/// from a separate read.
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    /// Fetch every document in store order
    async fn find_all(&self) -> StoreResult<Vec<Document>>;

    /// Fetch one document by identifier
    async fn find_by_id(&self, id: &ObjectId) -> StoreResult<Option<Document>>;

    /// Insert a document; the store assigns `_id`
    async fn insert_one(&self, document: Document) -> StoreResult<InsertOutcome>;

    /// Write the given fields into the document matching `id`
    ///
    /// Fields absent from `fields` are left untouched. `modified_count` is
    /// zero when every supplied value already equals the stored one.
    async fn replace_fields(&self, id: &ObjectId, fields: Document) -> StoreResult<ReplaceOutcome>;

    /// Remove the document matching `id`
    async fn delete_by_id(&self, id: &ObjectId) -> StoreResult<DeleteOutcome>;
}

/// Process-wide store handle
///
/// Implementations must be cheap to share: the handle is created once at
/// startup and cloned into every resource router.
pub trait DocumentStore: Send + Sync {
    /// Get a handle to the collection called `name`
    fn collection(&self, name: &str) -> Arc<dyn DocumentCollection>;
}
