//! Trait abstractions for the app's I/O capabilities.
//!
//! Both boundaries are injected so tests can swap in doubles.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET for the posts endpoint
//! - [`KeyValueStore`] - persistent string values by key

pub mod http;
pub mod store;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use store::KeyValueStore;
