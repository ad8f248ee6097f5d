//! Test doubles for the trait abstractions.
//!
//! - [`MockHttpClient`] - scripted HTTP responses with request recording
//! - [`InMemoryStore`] - shared in-memory key-value storage with failure switches

pub mod http;
pub mod store;

pub use http::{MockHttpClient, MockResponse};
pub use store::InMemoryStore;
