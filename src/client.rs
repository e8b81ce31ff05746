//! The seam between the facade and the external document-database service.

use std::future::Future;

use crate::document::{Document, Fields};
use crate::error::StoreError;

/// One document store, hosted or fake.
///
/// Each method is a single stateless round trip; no call depends on a prior
/// one. Implementations hold whatever connection state they need behind
/// shared interior handles so one client value can serve concurrent calls.
pub trait StoreClient: Send + Sync {
    /// Create one document in `collection`; returns its service-assigned id.
    fn add(
        &self,
        collection: &str,
        fields: Fields,
    ) -> impl Future<Output = Result<String, StoreError>> + Send;

    /// Every document currently in `collection`, in whatever order the store
    /// yields. An unknown collection is an empty vec, not an error.
    fn get(
        &self,
        collection: &str,
    ) -> impl Future<Output = Result<Vec<Document>, StoreError>> + Send;

    /// Merge the top-level fields of `fields` into the document at `id`.
    /// Fails if the document does not exist.
    fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Delete the document at `id`. Fails if the document does not exist.
    fn remove(
        &self,
        collection: &str,
        id: &str,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}
