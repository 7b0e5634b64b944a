//! Small UI helpers shared by every page.

use tracing::debug;

use crate::ports::{DocumentReadiness, LoadableControl};

/// Content shown while a control is busy.
pub const LOADING_CONTENT: &str = r#"<span class="spinner"></span> Loading..."#;

/// Content restored when nothing was stashed.
pub const DEFAULT_CONTROL_CONTENT: &str = "Submit";

/// Toggles the busy state of `control`.
///
/// Entering the loading state stashes the current content; leaving it
/// restores the stash. Entering twice keeps the first stash.
pub fn set_loading(control: &dyn LoadableControl, loading: bool) {
    if loading {
        let current = control.content();
        if current != LOADING_CONTENT {
            control.stash_content(&current);
        }
        control.set_disabled(true);
        control.set_content(LOADING_CONTENT);
    } else {
        control.set_disabled(false);
        let restored = control
            .stashed_content()
            .unwrap_or_else(|| DEFAULT_CONTROL_CONTENT.to_string());
        control.set_content(&restored);
    }
}

/// Runs `f` once the document is ready, immediately if it already is.
pub fn on_dom_ready<F>(document: &dyn DocumentReadiness, f: F)
where
    F: FnOnce() + Send + 'static,
{
    let state = document.ready_state();
    if state.is_ready() {
        f();
    } else {
        debug!(%state, "Deferring until document is ready");
        document.on_content_loaded(Box::new(f));
    }
}
