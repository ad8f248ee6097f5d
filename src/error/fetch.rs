//! Errors from fetching the post list.

use thiserror::Error;

use crate::traits::HttpError;

/// Message shown on the error screen for any fetch failure.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load posts";

/// Failure to fetch or decode the post list.
///
/// The variants are kept apart for logging only. The UI shows
/// [`FetchError::user_message`], which is the same for all of them.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Http(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    /// The response body was not a JSON array of posts.
    #[error("failed to decode posts: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// The message shown to the user.
    pub fn user_message(&self) -> &'static str {
        FETCH_ERROR_MESSAGE
    }
}
