//! Notification domain module.
//!
//! Transient toast messages: their severity styling, identity and the
//! display lifecycle each one moves through.

mod message;
mod severity;
mod status;

pub use message::{Notification, NotificationId, DEFAULT_TTL};
pub use severity::{Severity, SeverityStyle};
pub use status::NotificationStatus;
