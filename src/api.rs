//! Client for the remote posts endpoint.

use std::sync::Arc;

use crate::error::FetchError;
use crate::models::Post;
use crate::traits::{Headers, HttpClient};

/// Public endpoint the post list is fetched from.
pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Fetches the post list with a single GET.
///
/// There is no retry, pagination, or caching here; retrying is the user's
/// call from the error screen.
#[derive(Clone)]
pub struct PostsClient {
    http: Arc<dyn HttpClient>,
    url: String,
}

impl PostsClient {
    pub fn new(http: Arc<dyn HttpClient>, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// The URL requests go to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch every post, in the order the server returns them.
    ///
    /// # Errors
    /// - [`FetchError::Http`] if no response arrived
    /// - [`FetchError::Status`] for a non-2xx status
    /// - [`FetchError::Decode`] if the body is not an array of posts
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        let response = self.http.get(&self.url, &Headers::new()).await?;

        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }

        Ok(response.json::<Vec<Post>>()?)
    }
}

impl std::fmt::Debug for PostsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostsClient")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}
