use serde::{Deserialize, Serialize};

/// A single article record as returned by the posts endpoint.
///
/// Identity is `id`; two posts with the same id are the same post for
/// favoriting purposes even if their text differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier assigned by the server
    pub id: u64,
    /// Post title
    pub title: String,
    /// Post body, may contain newlines
    pub body: String,
    /// Author id as sent by the server (`userId`)
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

impl Post {
    /// Create a post without an author id.
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            user_id: None,
        }
    }

    /// Set the author id.
    pub fn with_user_id(mut self, user_id: u64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// The body collapsed onto a single line for list previews.
    pub fn body_preview(&self) -> String {
        self.body.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
