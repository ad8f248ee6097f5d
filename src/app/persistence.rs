//! Background writer for the favorite set.
//!
//! Saves are queued on a channel and written one at a time in toggle order,
//! so an older set can never land after a newer one.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::AppMessage;
use crate::favorites::{FavoriteSet, FavoritesStore};

/// Spawn the writer. It drains the queue and exits once every save sender
/// is dropped, even if nobody is listening for the results anymore.
pub fn spawn_persistence_worker(
    store: FavoritesStore,
    mut saves: mpsc::UnboundedReceiver<FavoriteSet>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(favorites) = saves.recv().await {
            let count = favorites.len();
            let result = store.save_favorites(&favorites).await;
            let _ = message_tx.send(AppMessage::FavoritesSaved { count, result });
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryStore;
    use crate::models::Post;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_writes_in_order() {
        let backend = InMemoryStore::new();
        let store = FavoritesStore::new(Arc::new(backend.clone()));
        let (save_tx, save_rx) = mpsc::unbounded_channel();
        let (message_tx, mut message_rx) = mpsc::unbounded_channel();
        let handle = spawn_persistence_worker(store.clone(), save_rx, message_tx);

        let first = FavoriteSet::from(vec![Post::new(1, "a", "b")]);
        let second = FavoriteSet::from(vec![Post::new(1, "a", "b"), Post::new(2, "c", "d")]);
        save_tx.send(first).unwrap();
        save_tx.send(second.clone()).unwrap();
        drop(save_tx);

        for expected in [1, 2] {
            match message_rx.recv().await {
                Some(AppMessage::FavoritesSaved { count, result }) => {
                    assert_eq!(count, expected);
                    assert!(result.is_ok());
                }
                other => panic!("unexpected message: {:?}", other),
            }
        }

        handle.await.unwrap();
        assert_eq!(store.load_favorites().await.unwrap(), second);
        assert_eq!(backend.write_count(), 2);
    }

    #[tokio::test]
    async fn test_reports_failures() {
        let backend = InMemoryStore::new();
        backend.set_set_should_fail(true);
        let store = FavoritesStore::new(Arc::new(backend));
        let (save_tx, save_rx) = mpsc::unbounded_channel();
        let (message_tx, mut message_rx) = mpsc::unbounded_channel();
        let _handle = spawn_persistence_worker(store, save_rx, message_tx);

        save_tx.send(FavoriteSet::new()).unwrap();
        match message_rx.recv().await {
            Some(AppMessage::FavoritesSaved { result, .. }) => assert!(result.is_err()),
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
