//! Persistence of the favorite set through a [`KeyValueStore`].

use std::sync::Arc;

use super::FavoriteSet;
use crate::error::StoreError;
use crate::traits::KeyValueStore;

/// Storage key holding the serialized favorites.
pub const FAVORITES_KEY: &str = "favorites";

/// Loads and saves the whole [`FavoriteSet`] under [`FAVORITES_KEY`].
#[derive(Clone)]
pub struct FavoritesStore {
    backend: Arc<dyn KeyValueStore>,
}

impl FavoritesStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Read the stored favorites.
    ///
    /// An absent key yields an empty set. A value that is not a JSON array of
    /// posts yields [`StoreError::Serialization`].
    pub async fn load_favorites(&self) -> Result<FavoriteSet, StoreError> {
        let Some(raw) = self.backend.get(FAVORITES_KEY).await? else {
            return Ok(FavoriteSet::new());
        };
        if raw.trim().is_empty() {
            return Ok(FavoriteSet::new());
        }
        serde_json::from_str(&raw).map_err(|source| StoreError::Serialization {
            key: FAVORITES_KEY.to_string(),
            source,
        })
    }

    /// Overwrite the stored favorites with `favorites`.
    pub async fn save_favorites(&self, favorites: &FavoriteSet) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(favorites).map_err(|source| {
            StoreError::Serialization {
                key: FAVORITES_KEY.to_string(),
                source,
            }
        })?;
        self.backend.set(FAVORITES_KEY, &json).await
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("key", &FAVORITES_KEY)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryStore;
    use crate::models::Post;

    fn store_with(backend: &InMemoryStore) -> FavoritesStore {
        FavoritesStore::new(Arc::new(backend.clone()))
    }

    #[tokio::test]
    async fn test_load_absent_is_empty() {
        let backend = InMemoryStore::new();
        let favorites = store_with(&backend).load_favorites().await.unwrap();
        assert!(favorites.is_empty());
    }

    #[tokio::test]
    async fn test_load_blank_is_empty() {
        let backend = InMemoryStore::with_value(FAVORITES_KEY, "  \n");
        let favorites = store_with(&backend).load_favorites().await.unwrap();
        assert!(favorites.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let backend = InMemoryStore::new();
        let store = store_with(&backend);
        let favorites = FavoriteSet::from(vec![
            Post::new(2, "two", "b").with_user_id(1),
            Post::new(5, "five", "e"),
        ]);

        store.save_favorites(&favorites).await.unwrap();
        assert_eq!(store.load_favorites().await.unwrap(), favorites);
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let backend = InMemoryStore::new();
        let store = store_with(&backend);

        store
            .save_favorites(&FavoriteSet::from(vec![Post::new(1, "a", "b")]))
            .await
            .unwrap();
        store.save_favorites(&FavoriteSet::new()).await.unwrap();

        assert!(store.load_favorites().await.unwrap().is_empty());
        assert_eq!(backend.value(FAVORITES_KEY), Some("[]".to_string()));
    }

    #[tokio::test]
    async fn test_load_malformed_is_serialization_error() {
        let backend = InMemoryStore::with_value(FAVORITES_KEY, "{not json");
        let result = store_with(&backend).load_favorites().await;
        assert!(matches!(result, Err(StoreError::Serialization { .. })));
    }

    #[tokio::test]
    async fn test_load_wrong_shape_is_serialization_error() {
        let backend = InMemoryStore::with_value(FAVORITES_KEY, r#"{"id": 1}"#);
        let result = store_with(&backend).load_favorites().await;
        assert!(matches!(result, Err(StoreError::Serialization { .. })));
    }

    #[tokio::test]
    async fn test_backend_failures_propagate() {
        let backend = InMemoryStore::new();
        backend.set_get_should_fail(true);
        backend.set_set_should_fail(true);
        let store = store_with(&backend);

        assert!(matches!(
            store.load_favorites().await,
            Err(StoreError::Backend(_))
        ));
        assert!(matches!(
            store.save_favorites(&FavoriteSet::new()).await,
            Err(StoreError::Backend(_))
        ));
    }
}
