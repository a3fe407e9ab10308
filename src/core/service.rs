//! Resource handler
//!
//! [`ResourceService`] runs the five standard operations for one resource.
//! Each operation issues exactly one store call and maps its metadata to an
//! outcome; store failures become [`ApiError::Store`] carrying the
//! operation's message.

use crate::core::error::ApiError;
use crate::core::resource::Resource;
use crate::core::store::{DocumentCollection, DocumentStore, StoreError};
use mongodb::bson::{Bson, Document, oid::ObjectId};
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

/// Render a stored document as JSON
///
/// `_id` becomes its hex string; every other value uses relaxed extended JSON
/// so integers, strings and booleans come out as plain JSON.
pub fn document_to_json(mut doc: Document) -> Value {
    let id = doc.remove("_id");
    let mut json = Bson::Document(doc).into_relaxed_extjson();

    if let (Some(id), Value::Object(map)) = (id, &mut json) {
        let id = match id {
            Bson::ObjectId(oid) => Value::String(oid.to_hex()),
            other => other.into_relaxed_extjson(),
        };
        map.insert("_id".to_string(), id);
    }

    json
}

/// CRUD operations for resource `R` over an injected store
pub struct ResourceService<R> {
    collection: Arc<dyn DocumentCollection>,
    _marker: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R: Resource> ResourceService<R> {
    /// Bind the service to `R::COLLECTION` in the given store
    pub fn new(store: &dyn DocumentStore) -> Self {
        Self {
            collection: store.collection(R::COLLECTION),
            _marker: PhantomData,
        }
    }

    fn store_error(message: &'static str) -> impl FnOnce(StoreError) -> ApiError {
        move |source| ApiError::Store { message, source }
    }

    /// Fetch every document in store order
    pub async fn list(&self) -> Result<Vec<Value>, ApiError> {
        let docs = self
            .collection
            .find_all()
            .await
            .map_err(Self::store_error(R::MESSAGES.list_failed))?;

        Ok(docs.into_iter().map(document_to_json).collect())
    }

    /// Fetch one document
    pub async fn get(&self, id: &ObjectId) -> Result<Value, ApiError> {
        self.collection
            .find_by_id(id)
            .await
            .map_err(Self::store_error(R::MESSAGES.get_failed))?
            .map(document_to_json)
            .ok_or(ApiError::NotFound {
                message: R::MESSAGES.not_found,
            })
    }

    /// Insert a document built from the whitelisted create payload
    pub async fn create(&self, payload: R::New) -> Result<ObjectId, ApiError> {
        let failed = R::MESSAGES.create_failed;
        let document = mongodb::bson::to_document(&payload)
            .map_err(|e| Self::store_error(failed)(e.into()))?;

        let outcome = self
            .collection
            .insert_one(document)
            .await
            .map_err(Self::store_error(failed))?;

        if !outcome.acknowledged {
            return Err(ApiError::Store {
                message: failed,
                source: StoreError::Unacknowledged("Insert operation not acknowledged".into()),
            });
        }

        tracing::info!(
            collection = R::COLLECTION,
            id = %outcome.inserted_id,
            "document created"
        );
        Ok(outcome.inserted_id)
    }

    /// Write the supplied fields into an existing document
    ///
    /// Fields absent from `changes` keep their stored values, so a replace
    /// carrying only `stakes` leaves every other counter untouched. This is a
    /// whitelisted replace, not a free-form patch: only declared fields reach
    /// the store.
    ///
    /// The outcome is classified from the single write's metadata:
    /// modified, not matched, or matched but unchanged.
    pub async fn replace(&self, id: &ObjectId, changes: R::Changes) -> Result<(), ApiError> {
        let failed = R::MESSAGES.replace_failed;
        let fields = mongodb::bson::to_document(&changes)
            .map_err(|e| Self::store_error(failed)(e.into()))?;

        let outcome = self
            .collection
            .replace_fields(id, fields)
            .await
            .map_err(Self::store_error(failed))?;

        if outcome.modified_count > 0 {
            tracing::info!(collection = R::COLLECTION, %id, "document replaced");
            Ok(())
        } else if outcome.matched_count == 0 {
            Err(ApiError::NotFound {
                message: R::MESSAGES.not_found,
            })
        } else {
            Err(ApiError::NoChanges {
                message: R::MESSAGES.no_changes,
            })
        }
    }

    /// Remove a document
    pub async fn delete(&self, id: &ObjectId) -> Result<(), ApiError> {
        let outcome = self
            .collection
            .delete_by_id(id)
            .await
            .map_err(Self::store_error(R::MESSAGES.delete_failed))?;

        if outcome.deleted_count > 0 {
            tracing::info!(collection = R::COLLECTION, %id, "document deleted");
            Ok(())
        } else {
            Err(ApiError::NotFound {
                message: R::MESSAGES.not_found,
            })
        }
    }
}
