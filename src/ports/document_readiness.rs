//! Document Readiness Port - the host document's load state.

use std::fmt;

/// Mirrors `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// True once the DOM can be queried.
    pub fn is_ready(&self) -> bool {
        !matches!(self, ReadyState::Loading)
    }
}

impl fmt::Display for ReadyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReadyState::Loading => "loading",
            ReadyState::Interactive => "interactive",
            ReadyState::Complete => "complete",
        };
        write!(f, "{}", s)
    }
}

/// Callback run when the document becomes ready.
pub type ReadyCallback = Box<dyn FnOnce() + Send + 'static>;

/// The host document.
pub trait DocumentReadiness: Send + Sync {
    /// Current load state.
    fn ready_state(&self) -> ReadyState;

    /// Registers `callback` for the content-loaded event. It runs once.
    fn on_content_loaded(&self, callback: ReadyCallback);
}
