//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileStore`] - key-value storage as JSON files in the data directory
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::InMemoryStore`] - In-memory key-value storage

pub mod file_store;
pub mod mock;
pub mod reqwest_http;

pub use file_store::FileStore;
pub use mock::{InMemoryStore, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
