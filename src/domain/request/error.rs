//! Request failure classification.

use http::StatusCode;
use thiserror::Error;

/// Why a backend call failed.
///
/// Every variant displays as its bare message, which is also the text shown
/// to the user in the error notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// No response was obtained.
    #[error("{message}")]
    Transport { message: String },

    /// A response arrived with a non-success status.
    #[error("{message}")]
    Api { message: String, status: StatusCode },

    /// A response arrived but its body was not JSON.
    #[error("{message}")]
    InvalidResponse { message: String, status: StatusCode },

    /// The request could not be assembled.
    #[error("{message}")]
    InvalidRequest { message: String },
}

impl RequestError {
    pub fn transport(message: impl Into<String>) -> Self {
        RequestError::Transport {
            message: message.into(),
        }
    }

    pub fn api(message: impl Into<String>, status: StatusCode) -> Self {
        RequestError::Api {
            message: message.into(),
            status,
        }
    }

    pub fn invalid_response(message: impl Into<String>, status: StatusCode) -> Self {
        RequestError::InvalidResponse {
            message: message.into(),
            status,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        RequestError::InvalidRequest {
            message: message.into(),
        }
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        match self {
            RequestError::Transport { message }
            | RequestError::Api { message, .. }
            | RequestError::InvalidResponse { message, .. }
            | RequestError::InvalidRequest { message } => message,
        }
    }

    /// The HTTP status, when a response was received.
    pub fn http_status(&self) -> Option<StatusCode> {
        match self {
            RequestError::Api { status, .. } | RequestError::InvalidResponse { status, .. } => {
                Some(*status)
            }
            RequestError::Transport { .. } | RequestError::InvalidRequest { .. } => None,
        }
    }

    /// True if the server rejected the credentials or token.
    pub fn is_unauthorized(&self) -> bool {
        self.http_status() == Some(StatusCode::UNAUTHORIZED)
    }
}

/// Message used when a failed response carries no `error` field.
pub fn status_fallback_message(status: StatusCode) -> String {
    format!("HTTP error! status: {}", status.as_u16())
}
