//! Key-value storage trait abstraction.
//!
//! Models device-local persistent storage as an injected capability with
//! `get`/`set`, so tests can replace it with an in-memory double.

use async_trait::async_trait;

use crate::error::StoreError;

/// Persistent string storage addressed by key.
///
/// # Example
///
/// ```ignore
/// use postboard::traits::KeyValueStore;
///
/// async fn remember<S: KeyValueStore>(store: &S) -> Result<(), StoreError> {
///     store.set("greeting", "hello").await?;
///     assert_eq!(store.get("greeting").await?, Some("hello".to_string()));
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if a value is stored
    /// - `Ok(None)` if the key has never been written
    /// - `Err(error)` if reading failed
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    ///
    /// A failed write must leave the previous value readable.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
