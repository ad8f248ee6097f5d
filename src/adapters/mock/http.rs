//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors for testing purposes.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

impl MockResponse {
    /// A 200 response carrying `body`.
    pub fn json(body: impl Into<String>) -> Self {
        MockResponse::Success(Response::new(200, body.into()))
    }
}

/// Mock HTTP client for testing.
///
/// Responses can be fixed per URL, or queued per URL to script a sequence
/// (first request fails, second succeeds). Queued responses take priority;
/// once a queue is drained the fixed response applies.
///
/// # Example
///
/// ```ignore
/// use postboard::adapters::mock::{MockHttpClient, MockResponse};
/// use postboard::traits::{HttpClient, HttpError, Headers};
///
/// let client = MockHttpClient::new();
/// client.push_response(URL, MockResponse::Error(HttpError::ConnectionFailed("down".into())));
/// client.set_response(URL, MockResponse::json("[]"));
///
/// assert!(client.get(URL, &Headers::new()).await.is_err());
/// assert!(client.get(URL, &Headers::new()).await.is_ok());
/// assert_eq!(client.get_requests().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    queued: Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response for a URL, matched exactly.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    /// Queue a one-shot response for a URL.
    pub fn push_response(&self, url: &str, response: MockResponse) {
        self.queued
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn next_response(&self, url: &str) -> Option<MockResponse> {
        if let Some(queue) = self.queued.lock().unwrap().get_mut(url) {
            if let Some(response) = queue.pop_front() {
                return Some(response);
            }
        }
        self.responses.lock().unwrap().get(url).cloned()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });

        match self.next_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.test/posts";

    #[tokio::test]
    async fn test_fixed_response() {
        let client = MockHttpClient::new();
        client.set_response(URL, MockResponse::json("[]"));

        let response = client.get(URL, &Headers::new()).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, bytes::Bytes::from("[]"));

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, URL);
    }

    #[tokio::test]
    async fn test_queued_then_fixed() {
        let client = MockHttpClient::new();
        client.push_response(
            URL,
            MockResponse::Error(HttpError::ConnectionFailed("down".to_string())),
        );
        client.set_response(URL, MockResponse::json("[]"));

        assert!(client.get(URL, &Headers::new()).await.is_err());
        assert!(client.get(URL, &Headers::new()).await.is_ok());
        assert!(client.get(URL, &Headers::new()).await.is_ok());
        assert_eq!(client.request_count(), 3);
    }

    #[tokio::test]
    async fn test_unknown_url() {
        let client = MockHttpClient::new();
        let err = client.get(URL, &Headers::new()).await.unwrap_err();
        assert!(err.to_string().contains("No mock response"));
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let client = MockHttpClient::new();
        let clone = client.clone();
        clone.set_response(URL, MockResponse::json("[]"));

        assert!(client.get(URL, &Headers::new()).await.is_ok());
        assert_eq!(clone.request_count(), 1);
    }
}
