//! The public facade: four operations against named collections.
//!
//! Each operation validates its payload, delegates to the configured
//! [`StoreClient`], logs the outcome, and returns the client's result
//! unchanged. The facade holds no state beyond the client handle and adds no
//! retry, timeout, or cancellation; callers impose their own if needed.

use serde_json::Value;
use tracing::{debug, error};

use crate::client::StoreClient;
use crate::document::{object_fields, Document};
use crate::error::StoreError;

/// CRUD facade over a store client.
///
/// ## Example
///
/// ```
/// use docstore::{Collections, MemoryClient};
/// use serde_json::json;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), docstore::StoreError> {
/// let store = Collections::new(MemoryClient::new());
/// let id = store.add("users", json!({ "name": "Alice" })).await?;
/// let users = store.get("users").await?;
/// assert_eq!(users[0].id, id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Collections<C> {
    client: C,
}

impl<C: StoreClient> Collections<C> {
    pub fn new(client: C) -> Self {
        Collections { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Create one document in `collection` from a JSON object payload;
    /// returns the service-assigned id.
    pub async fn add(&self, collection: &str, data: Value) -> Result<String, StoreError> {
        let fields = object_fields(data)?;
        match self.client.add(collection, fields).await {
            Ok(id) => {
                debug!(collection, id = %id, "document added");
                Ok(id)
            }
            Err(err) => {
                error!(collection, error = %err, "error adding document");
                Err(err)
            }
        }
    }

    /// Every document currently in `collection`, each tagged with its id.
    /// Ordering is whatever the store returns. An empty or unknown collection
    /// yields an empty vec.
    pub async fn get(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        match self.client.get(collection).await {
            Ok(documents) => {
                debug!(collection, count = documents.len(), "documents fetched");
                Ok(documents)
            }
            Err(err) => {
                error!(collection, error = %err, "error getting documents");
                Err(err)
            }
        }
    }

    /// Merge the top-level fields of `new_data` into the document at `id`.
    /// Fields not named in `new_data` keep their values.
    pub async fn update(
        &self,
        collection: &str,
        id: &str,
        new_data: Value,
    ) -> Result<(), StoreError> {
        let fields = object_fields(new_data)?;
        match self.client.update(collection, id, fields).await {
            Ok(()) => {
                debug!(collection, id, "document updated");
                Ok(())
            }
            Err(err) => {
                error!(collection, id, error = %err, "error updating document");
                Err(err)
            }
        }
    }

    /// Delete the document at `id`.
    pub async fn remove(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        match self.client.remove(collection, id).await {
            Ok(()) => {
                debug!(collection, id, "document deleted");
                Ok(())
            }
            Err(err) => {
                error!(collection, id, error = %err, "error deleting document");
                Err(err)
            }
        }
    }
}
