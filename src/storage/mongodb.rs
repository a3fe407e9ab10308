//! MongoDB storage backend using the official MongoDB async driver.
//!
//! [`MongoStore`] wraps a `mongodb::Database`. It is connected once at
//! startup and shared by every resource; the driver's connection pool makes
//! the handle safe for concurrent use.
//!
//! # Storage model
//!
//! Each resource lives in its own collection (`temples`, `cojccountries`).
//! Documents are stored with their native `_id: ObjectId`; the API exposes
//! that id as a 24-character hex string.

use crate::core::store::{
    DeleteOutcome, DocumentCollection, DocumentStore, InsertOutcome, ReplaceOutcome, StoreError,
    StoreResult,
};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc, oid::ObjectId};
use mongodb::error::ErrorKind;
use mongodb::options::Acknowledgment;
use mongodb::{Client, Collection, Database};
use std::sync::Arc;

/// Database used when neither the configuration nor the URI names one
pub const DEFAULT_DATABASE: &str = "test";

/// Classify a driver error
fn store_error(err: mongodb::error::Error) -> StoreError {
    match *err.kind {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            StoreError::Connection(err.to_string())
        }
        _ => StoreError::Backend(err.to_string()),
    }
}

/// Process-wide MongoDB store handle
///
/// # Example
///
/// ```rust,ignore
/// let store = MongoStore::connect("mongodb://localhost:27017", Some("temples")).await?;
/// let temples = store.collection("temples");
/// ```
#[derive(Clone, Debug)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Wrap an already-connected database handle
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Connect and verify the server is reachable
    ///
    /// The driver connects lazily, so a `ping` is issued here; an
    /// unreachable server fails startup instead of the first request.
    pub async fn connect(uri: &str, database: Option<&str>) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let database = match database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        tracing::info!(database = database.name(), "connected to MongoDB");
        Ok(Self { database })
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Database {
        &self.database
    }
}

impl DocumentStore for MongoStore {
    fn collection(&self, name: &str) -> Arc<dyn DocumentCollection> {
        Arc::new(MongoCollection {
            inner: self.database.collection(name),
        })
    }
}

/// Handle to one MongoDB collection
#[derive(Clone, Debug)]
pub struct MongoCollection {
    inner: Collection<Document>,
}

impl MongoCollection {
    /// Writes are acknowledged unless the write concern asks for `w: 0`
    fn acknowledged(&self) -> bool {
        !matches!(
            self.inner.write_concern().and_then(|wc| wc.w.as_ref()),
            Some(Acknowledgment::Nodes(0))
        )
    }
}

#[async_trait]
impl DocumentCollection for MongoCollection {
    async fn find_all(&self) -> StoreResult<Vec<Document>> {
        let cursor = self.inner.find(doc! {}).await.map_err(store_error)?;
        cursor.try_collect().await.map_err(store_error)
    }

    async fn find_by_id(&self, id: &ObjectId) -> StoreResult<Option<Document>> {
        self.inner
            .find_one(doc! { "_id": *id })
            .await
            .map_err(store_error)
    }

    async fn insert_one(&self, document: Document) -> StoreResult<InsertOutcome> {
        let result = self.inner.insert_one(document).await.map_err(store_error)?;

        let Bson::ObjectId(inserted_id) = result.inserted_id else {
            return Err(StoreError::Backend(format!(
                "Unexpected inserted id: {}",
                result.inserted_id
            )));
        };

        Ok(InsertOutcome {
            acknowledged: self.acknowledged(),
            inserted_id,
        })
    }

    async fn replace_fields(&self, id: &ObjectId, fields: Document) -> StoreResult<ReplaceOutcome> {
        let result = self
            .inner
            .update_one(doc! { "_id": *id }, doc! { "$set": fields })
            .await
            .map_err(store_error)?;

        Ok(ReplaceOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete_by_id(&self, id: &ObjectId) -> StoreResult<DeleteOutcome> {
        let result = self
            .inner
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(store_error)?;

        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }
}
