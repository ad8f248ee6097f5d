//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::*;
//!
//! let http = MockHttpConfig::new().with_posts(POSTS_URL, &sample_posts(3)).build();
//! let mut app = test_app(&http, &InMemoryStore::new());
//! app.start();
//! settle(&mut app, |app| !app.state().loading).await;
//! ```

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use postboard::api::PostsClient;
use postboard::app::App;
use postboard::favorites::FavoritesStore;
use postboard::models::Post;

/// URL the mock client is scripted for.
pub const POSTS_URL: &str = "https://posts.test/posts";

/// Upper bound on waiting for background tasks.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Posts with ids `1..=count`.
pub fn sample_posts(count: u64) -> Vec<Post> {
    (1..=count)
        .map(|id| {
            Post::new(id, format!("Post title {}", id), format!("Body of post {}", id))
                .with_user_id(1)
        })
        .collect()
}

/// An app over the given doubles, not yet started.
pub fn test_app(http: &MockHttpClient, store: &InMemoryStore) -> App {
    App::new(
        PostsClient::new(Arc::new(http.clone()), POSTS_URL),
        FavoritesStore::new(Arc::new(store.clone())),
    )
}

/// Feed background completions into `app` until `done` holds.
///
/// Panics if that takes longer than a few seconds.
pub async fn settle<F>(app: &mut App, mut done: F)
where
    F: FnMut(&App) -> bool,
{
    let wait = async {
        while !done(app) {
            match app.recv_message().await {
                Some(message) => app.handle_message(message),
                None => panic!("message channel closed"),
            }
        }
    };
    tokio::time::timeout(SETTLE_TIMEOUT, wait)
        .await
        .expect("app did not settle in time");
}

/// Start the app and wait for both the fetch and the favorites load.
#[allow(dead_code)]
pub async fn start_and_load(app: &mut App) {
    app.start();
    settle(app, |app| !app.state().loading).await;
    // Favorites arrive as their own message, possibly after the posts
    while let Ok(Some(message)) =
        tokio::time::timeout(Duration::from_millis(20), app.recv_message()).await
    {
        app.handle_message(message);
    }
}
