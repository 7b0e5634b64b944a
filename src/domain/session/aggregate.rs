//! Session aggregate.
//!
//! The client-held record of an authenticated user: who they are, the bearer
//! token the backend issued, and when the login happened. The session is
//! persisted as JSON under a single storage key and read back on every
//! outgoing request.

use serde::{Deserialize, Serialize};

use super::UserRecord;
use crate::domain::foundation::Timestamp;

/// Persisted record of an authenticated user plus bearer token.
///
/// # Invariants
///
/// - Only a non-empty `token` authorizes requests; an empty token behaves
///   exactly like having no session.
/// - Never expires client-side; it is destroyed only by logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The user returned by the login endpoint.
    pub user: UserRecord,

    /// Opaque bearer token.
    #[serde(default)]
    pub token: String,

    /// When the login completed.
    pub login_time: Timestamp,
}

impl Session {
    /// Creates a session stamped with the current time.
    pub fn new(user: UserRecord, token: impl Into<String>) -> Self {
        Self::with_login_time(user, token, Timestamp::now())
    }

    /// Creates a session with an explicit login time.
    pub fn with_login_time(user: UserRecord, token: impl Into<String>, login_time: Timestamp) -> Self {
        Self {
            user,
            token: token.into(),
            login_time,
        }
    }

    /// Returns the token if it can be used for authorization.
    pub fn bearer_token(&self) -> Option<&str> {
        if self.token.is_empty() {
            None
        } else {
            Some(&self.token)
        }
    }

    /// Returns the value for an `Authorization` header.
    pub fn authorization_value(&self) -> Option<String> {
        self.bearer_token().map(|token| format!("Bearer {}", token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn student() -> UserRecord {
        serde_json::from_value(json!({
            "id": 7,
            "username": "ada",
            "email": "ada@example.com",
            "role": "student",
            "grade": 10
        }))
        .unwrap()
    }

    #[test]
    fn empty_token_is_not_a_bearer_token() {
        let session = Session::new(student(), "");
        assert_eq!(session.bearer_token(), None);
        assert_eq!(session.authorization_value(), None);
    }

    #[test]
    fn authorization_value_uses_bearer_scheme() {
        let session = Session::new(student(), "abc.def");
        assert_eq!(session.authorization_value().as_deref(), Some("Bearer abc.def"));
    }

    #[test]
    fn serializes_with_browser_field_names() {
        let session = Session::new(student(), "tok");
        let value = serde_json::to_value(&session).unwrap();

        assert!(value.get("loginTime").is_some());
        assert_eq!(value["token"], "tok");
        assert_eq!(value["user"]["grade"], 10);
    }

    #[test]
    fn reads_session_written_by_browser_client() {
        let raw = r#"{
            "user": {"id": 3, "username": "grace", "role": "teacher", "email": "g@x.io", "grade": null},
            "token": "t-1",
            "loginTime": "2024-03-01T08:00:00.000Z"
        }"#;
        let session: Session = serde_json::from_str(raw).unwrap();

        assert_eq!(session.user.id, 3);
        assert_eq!(session.bearer_token(), Some("t-1"));
        assert_eq!(session.login_time.to_iso_string(), "2024-03-01T08:00:00.000Z");
    }

    #[test]
    fn missing_token_deserializes_as_unauthenticated() {
        let raw = r#"{"user": {"id": 1}, "loginTime": "2024-03-01T08:00:00Z"}"#;
        let session: Session = serde_json::from_str(raw).unwrap();
        assert_eq!(session.bearer_token(), None);
    }
}
