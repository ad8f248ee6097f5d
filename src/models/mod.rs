//! Data models for posts fetched from the remote endpoint.

mod post;

pub use post::Post;
