//! EduTech client runtime.
//!
//! Wraps the EduTech learning platform's REST API for any host that can
//! supply a handful of capabilities (network, storage, timers, a place to
//! render toasts, page navigation).
//!
//! # Architecture
//!
//! - `domain` - Sessions, notifications, request envelopes and validators
//! - `ports` - Capability traits the host provides
//! - `adapters` - Implementations of those traits
//! - `application` - Gateway, session store, notification queue and client
//! - `config` - Environment-driven settings
//! - `telemetry` - Tracing subscriber setup
//!
//! # Example
//!
//! ```ignore
//! let runtime = Runtime::from_config(&AppConfig::load()?)?;
//! let quizzes = runtime.client.list_quizzes().await?;
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod runtime;
pub mod telemetry;

pub use application::{ClientError, EduClient, NotificationService, RequestGateway, SessionStore};
pub use runtime::Runtime;
