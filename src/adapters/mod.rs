//! Adapters - Implementations of port interfaces.
//!
//! Each adapter implements one or more ports defined in `crate::ports`.
//!
//! - `http` - HTTP transports (reqwest, mock)
//! - `storage` - key-value storage scopes (in-memory, JSON file)
//! - `scheduler` - frame and timer scheduling (tokio, manual)
//! - `ui` - notification surfaces, navigators, controls, documents

pub mod http;
pub mod scheduler;
pub mod storage;
pub mod ui;

pub use http::{MockReply, MockTransport, ReqwestTransport};
pub use scheduler::{ManualScheduler, TokioScheduler, DEFAULT_FRAME_INTERVAL};
pub use storage::{InMemoryKeyValueStore, JsonFileKeyValueStore};
pub use ui::{
    ConsoleSurface, InMemoryControl, LogNavigator, ManualDocument, RecordingNavigator,
    RecordingSurface, RenderedToast, SurfaceEvent,
};
