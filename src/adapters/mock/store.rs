//! In-memory key-value store for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::traits::KeyValueStore;

/// In-memory key-value store for testing.
///
/// Clones share the same storage, so a test can hand one clone to the app
/// and inspect or "restart" with another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    get_should_fail: Arc<Mutex<bool>>,
    set_should_fail: Arc<Mutex<bool>>,
    writes: Arc<Mutex<usize>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.insert(key, value);
        store
    }

    /// Configure whether reads fail.
    pub fn set_get_should_fail(&self, should_fail: bool) {
        *self.get_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether writes fail.
    pub fn set_set_should_fail(&self, should_fail: bool) {
        *self.set_should_fail.lock().unwrap() = should_fail;
    }

    /// Read a value synchronously (for assertions).
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    /// Write a value synchronously (for fixtures).
    pub fn insert(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// Number of successful `set` calls.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if *self.get_should_fail.lock().unwrap() {
            return Err(StoreError::Backend("Mock get failure".to_string()));
        }
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if *self.set_should_fail.lock().unwrap() {
            return Err(StoreError::Backend("Mock set failure".to_string()));
        }
        self.insert(key, value);
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("favorites").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let store = InMemoryStore::new();
        store.set("favorites", "[]").await.unwrap();
        assert_eq!(store.get("favorites").await.unwrap(), Some("[]".to_string()));
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn test_failures() {
        let store = InMemoryStore::with_value("favorites", "[]");
        store.set_get_should_fail(true);
        store.set_set_should_fail(true);

        assert!(store.get("favorites").await.is_err());
        assert!(store.set("favorites", "[1]").await.is_err());
        assert_eq!(store.value("favorites"), Some("[]".to_string()));
        assert_eq!(store.write_count(), 0);
    }
}
