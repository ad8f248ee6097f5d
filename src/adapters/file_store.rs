//! File-backed key-value store adapter.
//!
//! Each key maps to `<root>/<key>.json`. Writes go to a temp file in the
//! same directory and are renamed over the target, so a crash mid-write
//! leaves the previous value intact.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::traits::KeyValueStore;

/// Key-value store persisting each value as a file under a root directory.
///
/// The root directory is created on the first write.
///
/// # Example
///
/// ```ignore
/// use postboard::adapters::FileStore;
/// use postboard::traits::KeyValueStore;
///
/// let store = FileStore::new("/home/me/.postboard");
/// store.set("favorites", "[]").await?;
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory values are stored in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    ///
    /// Keys are restricted to ASCII alphanumerics, `-` and `_` so they can
    /// never escape the root directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StoreError::io(&self.root, e))?;

        let tmp_path = self.root.join(format!(".{}.json.tmp", key));
        tokio::fs::write(&tmp_path, value)
            .await
            .map_err(|e| StoreError::io(&tmp_path, e))?;
        tokio::fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| StoreError::io(&path, e))?;

        tracing::debug!(key, path = %path.display(), bytes = value.len(), "value written");
        Ok(())
    }
}
