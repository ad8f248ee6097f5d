//! Favorites persisted through the file-backed store.

use postboard::adapters::FileStore;
use postboard::error::StoreError;
use postboard::favorites::{toggle_favorite, FavoriteSet, FavoritesStore, FAVORITES_KEY};
use postboard::models::Post;
use postboard::traits::KeyValueStore;
use std::sync::Arc;
use tempfile::TempDir;

fn favorites_in(dir: &TempDir) -> (FileStore, FavoritesStore) {
    let files = FileStore::new(dir.path());
    let store = FavoritesStore::new(Arc::new(files.clone()));
    (files, store)
}

#[tokio::test]
async fn test_absent_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let (_, store) = favorites_in(&dir);

    let loaded = store.load_favorites().await.unwrap();
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let (_, store) = favorites_in(&dir);

    let mut favorites = FavoriteSet::new();
    for post in [
        Post::new(5, "five", "body five").with_user_id(1),
        Post::new(2, "two", "body two"),
        Post::new(9, "nine ✓ unicode", "multi\nline body"),
    ] {
        favorites = toggle_favorite(&favorites, &post);
    }

    store.save_favorites(&favorites).await.unwrap();
    let loaded = store.load_favorites().await.unwrap();

    assert_eq!(loaded, favorites);
    assert_eq!(loaded.ids(), vec![5, 2, 9]);
}

#[tokio::test]
async fn test_save_overwrites_previous_value() {
    let dir = TempDir::new().unwrap();
    let (_, store) = favorites_in(&dir);

    let post = Post::new(1, "a", "b");
    let one = toggle_favorite(&FavoriteSet::new(), &post);
    store.save_favorites(&one).await.unwrap();
    let none = toggle_favorite(&one, &post);
    store.save_favorites(&none).await.unwrap();

    assert!(store.load_favorites().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_data_dir_created_on_first_save() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = FavoritesStore::new(Arc::new(FileStore::new(&nested)));

    store.save_favorites(&FavoriteSet::new()).await.unwrap();

    assert!(nested.join("favorites.json").exists());
    // No temp file left behind
    let entries: Vec<_> = std::fs::read_dir(&nested)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn test_malformed_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let (files, store) = favorites_in(&dir);
    files.set(FAVORITES_KEY, "[{\"id\": \"nope\"}]").await.unwrap();

    let err = store.load_favorites().await.unwrap_err();
    assert!(matches!(err, StoreError::Serialization { ref key, .. } if key == FAVORITES_KEY));
}

#[tokio::test]
async fn test_reads_hand_written_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("favorites.json"),
        r#"[{"id": 3, "title": "t", "body": "b", "userId": 4}]"#,
    )
    .unwrap();
    let (_, store) = favorites_in(&dir);

    let loaded = store.load_favorites().await.unwrap();
    assert_eq!(loaded.as_slice(), &[Post::new(3, "t", "b").with_user_id(4)][..]);
}
