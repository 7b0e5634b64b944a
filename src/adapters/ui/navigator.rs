//! Navigators.

use std::sync::Mutex;

use tracing::info;

use crate::ports::Navigator;

/// Records every navigation instead of performing it.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locations navigated to, oldest first.
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &str) {
        self.visited.lock().unwrap().push(location.to_string());
    }
}

/// Logs navigations. Used where there is no page to leave.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, location: &str) {
        info!(location, "Navigate");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let navigator = RecordingNavigator::new();
        navigator.navigate("/a");
        navigator.navigate("/b");
        assert_eq!(navigator.visited(), vec!["/a", "/b"]);
    }
}
