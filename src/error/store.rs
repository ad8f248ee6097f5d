//! Errors from the favorites key-value storage.

use std::path::PathBuf;

use thiserror::Error;

/// Storage read or write failure.
///
/// These are logged and otherwise swallowed: a failed load leaves the
/// favorites empty and a failed save leaves the in-memory state as is.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error while reading or writing a value.
    #[error("storage I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored value could not be (de)serialized.
    #[error("malformed value for key '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The key cannot be mapped onto the backend.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// Any other backend failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
