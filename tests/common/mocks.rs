//! Mock configurations for integration tests.
//!
//! Re-exports the doubles from `postboard::adapters::mock` and adds
//! builder-style setup for common scenarios.

pub use postboard::adapters::mock::{InMemoryStore, MockHttpClient, MockResponse};
pub use postboard::traits::{HttpError, Response};

use postboard::favorites::FAVORITES_KEY;
use postboard::models::Post;

/// Builder for a scripted [`MockHttpClient`].
pub struct MockHttpConfig {
    client: MockHttpClient,
}

#[allow(dead_code)]
impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Always answer `url` with `posts` as JSON.
    pub fn with_posts(self, url: &str, posts: &[Post]) -> Self {
        self.client.set_response(url, MockResponse::json(posts_json(posts)));
        self
    }

    /// Always answer `url` with `status` and a raw body.
    pub fn with_status(self, url: &str, status: u16, body: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Success(Response::new(status, body.to_string())),
        );
        self
    }

    /// Fail the next request to `url` at the transport level.
    pub fn failing_once(self, url: &str) -> Self {
        self.client.push_response(
            url,
            MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string())),
        );
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A store already holding `posts` under the favorites key.
#[allow(dead_code)]
pub fn store_with_favorites(posts: &[Post]) -> InMemoryStore {
    InMemoryStore::with_value(FAVORITES_KEY, &posts_json(posts))
}

pub fn posts_json(posts: &[Post]) -> String {
    serde_json::to_string(posts).unwrap()
}
