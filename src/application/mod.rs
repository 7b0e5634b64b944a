//! Application layer - services that orchestrate ports.
//!
//! - `NotificationService` - toast queue and its animation choreography
//! - `SessionStore` - session persistence across durable and tab scopes
//! - `RequestGateway` - envelope building, sending and failure handling
//! - `EduClient` - one method per backend operation
//! - `ui` - loading-state and document-ready helpers

mod edu_client;
mod notification_service;
mod request_gateway;
mod session_store;
pub mod ui;

pub use edu_client::{ClientError, EduClient, LoginResponse, DEFAULT_LOGIN_PAGE};
pub use notification_service::{
    ActiveNotification, NotificationService, NotificationTimings, DEFAULT_DISMISS_TRANSITION,
};
pub use request_gateway::RequestGateway;
pub use session_store::{SessionStore, SessionStoreError, DEFAULT_SESSION_KEY};
pub use ui::{on_dom_ready, set_loading};
