//! In-memory document store for testing and development

use crate::core::store::{
    DeleteOutcome, DocumentCollection, DocumentStore, InsertOutcome, ReplaceOutcome, StoreError,
    StoreResult,
};
use async_trait::async_trait;
use mongodb::bson::{Bson, Document, oid::ObjectId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

type Collections = Arc<RwLock<HashMap<String, Vec<Document>>>>;

/// In-memory store implementation
///
/// Documents keep insertion order within a collection. Uses RwLock for
/// thread-safe access; every operation holds the lock for its whole
/// filter-and-write, matching the single-call atomicity of a real store.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    collections: Collections,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for InMemoryStore {
    fn collection(&self, name: &str) -> Arc<dyn DocumentCollection> {
        Arc::new(InMemoryCollection {
            name: name.to_string(),
            collections: self.collections.clone(),
        })
    }
}

/// Handle to one collection of an [`InMemoryStore`]
#[derive(Clone)]
pub struct InMemoryCollection {
    name: String,
    collections: Collections,
}

fn has_id(doc: &Document, id: &ObjectId) -> bool {
    matches!(doc.get("_id"), Some(Bson::ObjectId(oid)) if oid == id)
}

#[async_trait]
impl DocumentCollection for InMemoryCollection {
    async fn find_all(&self) -> StoreResult<Vec<Document>> {
        let collections = self
            .collections
            .read()
            .map_err(|e| StoreError::Backend(format!("Failed to acquire read lock: {}", e)))?;

        Ok(collections.get(&self.name).cloned().unwrap_or_default())
    }

    async fn find_by_id(&self, id: &ObjectId) -> StoreResult<Option<Document>> {
        let collections = self
            .collections
            .read()
            .map_err(|e| StoreError::Backend(format!("Failed to acquire read lock: {}", e)))?;

        Ok(collections
            .get(&self.name)
            .and_then(|docs| docs.iter().find(|doc| has_id(doc, id)))
            .cloned())
    }

    async fn insert_one(&self, mut document: Document) -> StoreResult<InsertOutcome> {
        let mut collections = self
            .collections
            .write()
            .map_err(|e| StoreError::Backend(format!("Failed to acquire write lock: {}", e)))?;

        let inserted_id = ObjectId::new();
        document.insert("_id", inserted_id);
        collections
            .entry(self.name.clone())
            .or_default()
            .push(document);

        Ok(InsertOutcome {
            acknowledged: true,
            inserted_id,
        })
    }

    async fn replace_fields(&self, id: &ObjectId, fields: Document) -> StoreResult<ReplaceOutcome> {
        let mut collections = self
            .collections
            .write()
            .map_err(|e| StoreError::Backend(format!("Failed to acquire write lock: {}", e)))?;

        let Some(stored) = collections
            .get_mut(&self.name)
            .and_then(|docs| docs.iter_mut().find(|doc| has_id(doc, id)))
        else {
            return Ok(ReplaceOutcome::default());
        };

        let mut modified = false;
        for (key, value) in fields {
            if key == "_id" {
                continue;
            }
            if stored.get(&key) != Some(&value) {
                stored.insert(key, value);
                modified = true;
            }
        }

        Ok(ReplaceOutcome {
            matched_count: 1,
            modified_count: u64::from(modified),
        })
    }

    async fn delete_by_id(&self, id: &ObjectId) -> StoreResult<DeleteOutcome> {
        let mut collections = self
            .collections
            .write()
            .map_err(|e| StoreError::Backend(format!("Failed to acquire write lock: {}", e)))?;

        let Some(docs) = collections.get_mut(&self.name) else {
            return Ok(DeleteOutcome::default());
        };

        let before = docs.len();
        docs.retain(|doc| !has_id(doc, id));

        Ok(DeleteOutcome {
            deleted_count: (before - docs.len()) as u64,
        })
    }
}
