use std::fmt;

/// Error type for all store operations.
///
/// Carries whatever the external service reported. The facade logs these and
/// hands them back unchanged; no retry or fallback happens at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The hosted service rejected the request and returned an error payload.
    Service {
        code: u16,
        status: String,
        message: String,
    },
    /// The in-memory client has no document with this id.
    NotFound { collection: String, id: String },
    /// The service could not be reached or the response never arrived.
    Transport(String),
    /// The payload was not a JSON object, or a wire value could not be decoded.
    Codec(String),
    /// Required configuration was missing or unreadable.
    Config(String),
    /// In-memory store lock poisoned.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Service {
                code,
                status,
                message,
            } => write!(f, "service error {} ({}): {}", code, status, message),
            StoreError::NotFound { collection, id } => {
                write!(f, "no document '{}' in collection '{}'", id, collection)
            }
            StoreError::Transport(message) => write!(f, "transport error: {}", message),
            StoreError::Codec(message) => write!(f, "codec error: {}", message),
            StoreError::Config(message) => write!(f, "config error: {}", message),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Codec(err.to_string())
    }
}

#[cfg(feature = "rest")]
impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

impl StoreError {
    /// True for the "document does not exist" signal, whichever client
    /// produced it.
    pub fn is_not_found(&self) -> bool {
        match self {
            StoreError::NotFound { .. } => true,
            StoreError::Service { code, .. } => *code == 404,
            _ => false,
        }
    }
}
