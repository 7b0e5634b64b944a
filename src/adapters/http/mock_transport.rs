//! Mock HTTP transport for testing.
//!
//! Replies are consumed in the order they were queued; once the queue is
//! empty every request gets `200 {}`. Every envelope is recorded so tests can
//! inspect headers, query and body.
//!
//! # Example
//!
//! ```ignore
//! let transport = MockTransport::new()
//!     .with_json(StatusCode::OK, json!({"token": "abc", "user": {"id": 1}}));
//!
//! client.login("a@b.com", &password).await?;
//! assert_eq!(transport.last_request().unwrap().path, "/login");
//! ```

use async_trait::async_trait;
use http::StatusCode;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::request::RequestEnvelope;
use crate::ports::{HttpTransport, RawResponse, TransportError};

/// A queued reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    Response(RawResponse),
    Error(TransportError),
}

/// In-process transport returning canned replies.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    requests: Arc<Mutex<Vec<RequestEnvelope>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a JSON reply (builder form).
    pub fn with_json(self, status: StatusCode, body: Value) -> Self {
        self.push_json(status, body);
        self
    }

    /// Queues a transport failure (builder form).
    pub fn with_error(self, error: TransportError) -> Self {
        self.push_error(error);
        self
    }

    /// Queues a JSON reply.
    pub fn push_json(&self, status: StatusCode, body: Value) {
        self.push_raw(status, body.to_string());
    }

    /// Queues a reply with an arbitrary body.
    pub fn push_raw(&self, status: StatusCode, body: impl Into<Vec<u8>>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Response(RawResponse::new(status, body)));
    }

    /// Queues a transport failure.
    pub fn push_error(&self, error: TransportError) {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Error(error));
    }

    /// Number of requests sent so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// All recorded requests, oldest first.
    pub fn requests(&self) -> Vec<RequestEnvelope> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<RequestEnvelope> {
        self.requests.lock().unwrap().last().cloned()
    }

    fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockReply::Response(RawResponse::new(StatusCode::OK, "{}")))
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, envelope: RequestEnvelope) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(envelope);
        match self.next_reply() {
            MockReply::Response(response) => Ok(response),
            MockReply::Error(error) => Err(error),
        }
    }
}
