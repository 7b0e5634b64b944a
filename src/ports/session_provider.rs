//! Session Provider Port - where the gateway looks for a bearer token.
//!
//! The gateway asks for the current session before every request rather than
//! caching it, so a login or logout is observed by the next request.
//!
//! # Example
//!
//! ```ignore
//! let gateway = RequestGateway::new(transport, Arc::new(session_store), notifier);
//! ```

use async_trait::async_trait;

use crate::domain::session::Session;

/// Supplies the current session, if any.
///
/// # Contract
///
/// Implementations never fail: unreadable or malformed state is reported as
/// `None` (and logged by the implementation).
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Returns the current session.
    async fn load(&self) -> Option<Session>;
}
