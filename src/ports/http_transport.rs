//! HTTP Transport Port - sends prepared envelopes to the backend.
//!
//! The transport only moves bytes. Header policy, JSON parsing and failure
//! classification all live in the gateway, so a transport can be swapped
//! (reqwest, browser fetch, a test double) without changing behavior.

use async_trait::async_trait;
use http::StatusCode;

use crate::domain::request::RequestEnvelope;

/// A response as received, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Failure to obtain any response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Failed to build request: {0}")]
    Build(String),

    #[error("{0}")]
    Other(String),
}

/// Port for issuing HTTP requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the envelope and returns whatever response came back,
    /// regardless of status.
    async fn send(&self, envelope: RequestEnvelope) -> Result<RawResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_response_success_range() {
        assert!(RawResponse::new(StatusCode::CREATED, "{}").is_success());
        assert!(!RawResponse::new(StatusCode::BAD_REQUEST, "{}").is_success());
    }

    #[test]
    fn transport_error_messages() {
        assert_eq!(
            TransportError::Connect("refused".to_string()).to_string(),
            "Connection failed: refused"
        );
        assert_eq!(TransportError::Other("reset".to_string()).to_string(), "reset");
    }

    #[test]
    fn http_transport_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn HttpTransport) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn HttpTransport>>();
    }
}
