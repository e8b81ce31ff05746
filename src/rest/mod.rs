//! REST transport for the hosted document-database service.
//!
//! Requires the `rest` feature (on by default). One HTTP client per
//! [`RestClient`], built once from a [`StoreConfig`] and shared by every
//! call; the service serializes conflicting writes on its side.

mod wire;

use serde_json::Value;

use crate::client::StoreClient;
use crate::config::StoreConfig;
use crate::document::{Document, Fields};
use crate::error::StoreError;

/// Client for the hosted service's REST document API.
///
/// Documents are created with `POST`, listed with `GET`, merged with `PATCH`
/// plus an update mask naming the incoming fields, and deleted with `DELETE`.
/// Update and delete both carry an existence precondition so a missing
/// document surfaces as the service's not-found error instead of succeeding
/// silently. An empty merge issues only the existence check, never a
/// maskless PATCH (which the service treats as full replacement).
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base: String,
    api_key: String,
}

impl RestClient {
    /// Build a client from the startup configuration.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder().build()?;
        let base = format!(
            "{}/projects/{}/databases/(default)/documents",
            config.endpoint.trim_end_matches('/'),
            config.project_id
        );
        Ok(RestClient {
            http,
            base,
            api_key: config.api_key.clone(),
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base, collection)
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base, collection, id)
    }

    /// Read the response body, mapping non-success statuses to the error
    /// payload the service reported.
    async fn read_json(response: reqwest::Response) -> Result<Value, StoreError> {
        let code = response.status().as_u16();
        let text = response.text().await?;
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        if (200..300).contains(&code) {
            Ok(body)
        } else {
            Err(service_error(code, &body))
        }
    }
}

impl StoreClient for RestClient {
    async fn add(&self, collection: &str, fields: Fields) -> Result<String, StoreError> {
        let response = self
            .http
            .post(self.collection_url(collection))
            .query(&[("key", self.api_key.as_str())])
            .json(&wire::encode_body(&fields))
            .send()
            .await?;
        let body = Self::read_json(response).await?;
        let name = body
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| StoreError::Codec("create response has no document name".to_string()))?;
        Ok(wire::doc_id(name).to_string())
    }

    async fn get(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let response = self
            .http
            .get(self.collection_url(collection))
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;
        let body = Self::read_json(response).await?;
        // An empty collection comes back as `{}` with no `documents` key.
        let documents = body
            .get("documents")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        documents.iter().map(wire::decode_document).collect()
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        // A PATCH without an update mask replaces the whole document on the
        // service side. Merging an empty payload must not write anything, so
        // only the existence check goes out.
        if fields.is_empty() {
            let response = self
                .http
                .get(self.document_url(collection, id))
                .query(&[("key", self.api_key.as_str())])
                .send()
                .await?;
            Self::read_json(response).await?;
            return Ok(());
        }
        let mut query: Vec<(&str, String)> = vec![
            ("key", self.api_key.clone()),
            ("currentDocument.exists", "true".to_string()),
        ];
        for field in fields.keys() {
            query.push(("updateMask.fieldPaths", field.clone()));
        }
        let response = self
            .http
            .patch(self.document_url(collection, id))
            .query(&query)
            .json(&wire::encode_body(&fields))
            .send()
            .await?;
        Self::read_json(response).await?;
        Ok(())
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let response = self
            .http
            .delete(self.document_url(collection, id))
            .query(&[
                ("key", self.api_key.as_str()),
                ("currentDocument.exists", "true"),
            ])
            .send()
            .await?;
        Self::read_json(response).await?;
        Ok(())
    }
}

fn service_error(code: u16, body: &Value) -> StoreError {
    let error = body.get("error");
    let message = error
        .and_then(|err| err.get("message"))
        .and_then(Value::as_str)
        .or_else(|| body.as_str())
        .unwrap_or("unknown service error")
        .to_string();
    let status = error
        .and_then(|err| err.get("status"))
        .and_then(Value::as_str)
        .unwrap_or("UNKNOWN")
        .to_string();
    StoreError::Service {
        code,
        status,
        message,
    }
}
