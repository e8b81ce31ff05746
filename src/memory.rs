//! HashMap-backed store client for tests and local development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::client::StoreClient;
use crate::document::{Document, Fields};
use crate::error::StoreError;

/// In-memory document store.
///
/// Assigns sequential ids (`doc-1`, `doc-2`, ...). Clone-friendly via Arc;
/// clones share storage.
#[derive(Clone)]
pub struct MemoryClient {
    collections: Arc<RwLock<HashMap<String, HashMap<String, Fields>>>>,
    next_id: Arc<AtomicU64>,
}

impl Default for MemoryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryClient {
    pub fn new() -> Self {
        MemoryClient {
            collections: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl StoreClient for MemoryClient {
    async fn add(&self, collection: &str, fields: Fields) -> Result<String, StoreError> {
        let id = format!("doc-{}", self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);
        Ok(id)
    }

    async fn get(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        let document = collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(id))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        for (name, value) in fields {
            document.insert(name, value);
        }
        Ok(())
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        collections
            .get_mut(collection)
            .and_then(|documents| documents.remove(id))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        Ok(())
    }
}
