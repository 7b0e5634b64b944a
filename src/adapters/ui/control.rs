//! In-memory loadable control.

use std::sync::Mutex;

use crate::ports::LoadableControl;

#[derive(Debug, Default)]
struct ControlState {
    content: String,
    disabled: bool,
    stash: Option<String>,
}

/// A button-like control held in memory.
#[derive(Debug, Default)]
pub struct InMemoryControl {
    state: Mutex<ControlState>,
}

impl InMemoryControl {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(ControlState {
                content: content.into(),
                ..ControlState::default()
            }),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.state.lock().unwrap().disabled
    }
}

impl LoadableControl for InMemoryControl {
    fn content(&self) -> String {
        self.state.lock().unwrap().content.clone()
    }

    fn set_content(&self, content: &str) {
        self.state.lock().unwrap().content = content.to_string();
    }

    fn set_disabled(&self, disabled: bool) {
        self.state.lock().unwrap().disabled = disabled;
    }

    fn stashed_content(&self) -> Option<String> {
        self.state.lock().unwrap().stash.clone()
    }

    fn stash_content(&self, content: &str) {
        self.state.lock().unwrap().stash = Some(content.to_string());
    }
}
