//! Connection configuration for the hosted document-database service.

use std::env;

use crate::error::StoreError;

/// Default endpoint of the hosted service's REST API.
pub const DEFAULT_ENDPOINT: &str = "https://firestore.googleapis.com/v1";

/// The fixed credential set, consumed once at startup when a client is built.
///
/// Mirrors the service's web-app registration. Only `endpoint`, `project_id`
/// and `api_key` are used on the wire; the remaining fields identify the app
/// registration and are not sent with document requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub endpoint: String,
    pub project_id: String,
    pub api_key: String,
    pub auth_domain: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

impl StoreConfig {
    pub fn new(project_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        StoreConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            project_id: project_id.into(),
            api_key: api_key.into(),
            auth_domain: String::new(),
            storage_bucket: String::new(),
            messaging_sender_id: String::new(),
            app_id: String::new(),
        }
    }

    /// Point at a different endpoint (emulator, proxy).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_auth_domain(mut self, auth_domain: impl Into<String>) -> Self {
        self.auth_domain = auth_domain.into();
        self
    }

    pub fn with_storage_bucket(mut self, storage_bucket: impl Into<String>) -> Self {
        self.storage_bucket = storage_bucket.into();
        self
    }

    pub fn with_messaging_sender_id(mut self, sender_id: impl Into<String>) -> Self {
        self.messaging_sender_id = sender_id.into();
        self
    }

    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    /// Read the configuration from `DOCSTORE_*` environment variables.
    ///
    /// `DOCSTORE_PROJECT_ID` and `DOCSTORE_API_KEY` are required; the rest
    /// are optional.
    pub fn from_env() -> Result<Self, StoreError> {
        let mut config = StoreConfig::new(
            require_var("DOCSTORE_PROJECT_ID")?,
            require_var("DOCSTORE_API_KEY")?,
        );
        if let Ok(endpoint) = env::var("DOCSTORE_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Ok(auth_domain) = env::var("DOCSTORE_AUTH_DOMAIN") {
            config.auth_domain = auth_domain;
        }
        if let Ok(storage_bucket) = env::var("DOCSTORE_STORAGE_BUCKET") {
            config.storage_bucket = storage_bucket;
        }
        if let Ok(sender_id) = env::var("DOCSTORE_MESSAGING_SENDER_ID") {
            config.messaging_sender_id = sender_id;
        }
        if let Ok(app_id) = env::var("DOCSTORE_APP_ID") {
            config.app_id = app_id;
        }
        Ok(config)
    }
}

fn require_var(name: &str) -> Result<String, StoreError> {
    env::var(name).map_err(|_| StoreError::Config(format!("missing environment variable {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides() {
        let config = StoreConfig::new("demo-project", "key-123")
            .with_endpoint("http://localhost:8080/v1")
            .with_auth_domain("demo-project.example.com")
            .with_app_id("1:42:web:abc");

        assert_eq!(config.project_id, "demo-project");
        assert_eq!(config.api_key, "key-123");
        assert_eq!(config.endpoint, "http://localhost:8080/v1");
        assert_eq!(config.auth_domain, "demo-project.example.com");
        assert_eq!(config.app_id, "1:42:web:abc");
        assert!(config.storage_bucket.is_empty());
    }

    #[test]
    fn from_env_requires_project_and_key() {
        env::remove_var("DOCSTORE_PROJECT_ID");
        env::remove_var("DOCSTORE_API_KEY");
        let err = StoreConfig::from_env().unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }
}
