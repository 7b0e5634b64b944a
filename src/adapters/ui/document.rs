//! Manually driven document.

use std::sync::Mutex;

use crate::ports::{DocumentReadiness, ReadyCallback, ReadyState};

/// Document whose load completes when the caller says so.
pub struct ManualDocument {
    state: Mutex<ReadyState>,
    callbacks: Mutex<Vec<ReadyCallback>>,
}

impl ManualDocument {
    pub fn new(state: ReadyState) -> Self {
        Self {
            state: Mutex::new(state),
            callbacks: Mutex::new(Vec::new()),
        }
    }

    /// A document that is already fully loaded.
    pub fn loaded() -> Self {
        Self::new(ReadyState::Complete)
    }

    /// Callbacks waiting for the load event.
    pub fn pending(&self) -> usize {
        self.callbacks.lock().unwrap().len()
    }

    /// Marks the document loaded and fires waiting callbacks once.
    pub fn finish_loading(&self) {
        *self.state.lock().unwrap() = ReadyState::Complete;
        let callbacks = std::mem::take(&mut *self.callbacks.lock().unwrap());
        for callback in callbacks {
            callback();
        }
    }
}

impl DocumentReadiness for ManualDocument {
    fn ready_state(&self) -> ReadyState {
        *self.state.lock().unwrap()
    }

    fn on_content_loaded(&self, callback: ReadyCallback) {
        self.callbacks.lock().unwrap().push(callback);
    }
}
