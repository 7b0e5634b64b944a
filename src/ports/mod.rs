//! Ports - Interfaces for host capabilities.
//!
//! Following hexagonal architecture, ports define what the client runtime
//! needs from its host (network, storage, timers, screen, page). Adapters
//! implement these ports.
//!
//! ## Network and Storage Ports
//!
//! - `HttpTransport` - Sends prepared request envelopes
//! - `KeyValueStore` - One persistence scope (durable or tab-scoped)
//! - `SessionProvider` - Current session lookup for the gateway
//!
//! ## UI Ports
//!
//! - `Scheduler` - Animation frames and timers
//! - `NotificationSurface` - Where toasts are rendered
//! - `Notifier` - Raising a toast
//! - `Navigator` - Full-page redirects
//! - `LoadableControl` - A control with a busy state
//! - `DocumentReadiness` - Document load state

mod document_readiness;
mod http_transport;
mod key_value_store;
mod loadable_control;
mod navigator;
mod notification_surface;
mod notifier;
mod scheduler;
mod session_provider;

pub use document_readiness::{DocumentReadiness, ReadyCallback, ReadyState};
pub use http_transport::{HttpTransport, RawResponse, TransportError};
pub use key_value_store::{KeyValueStore, StorageError};
pub use loadable_control::LoadableControl;
pub use navigator::Navigator;
pub use notification_surface::NotificationSurface;
pub use notifier::Notifier;
pub use scheduler::{ScheduledTask, Scheduler};
pub use session_provider::SessionProvider;
