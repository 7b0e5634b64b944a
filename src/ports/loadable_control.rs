//! Loadable Control Port - an interactive control that can show a busy state.
//!
//! Mirrors a form button: its inner content, its disabled flag and a data
//! slot where the pre-loading content is stashed.

/// A control `set_loading` can toggle.
pub trait LoadableControl {
    /// Current inner content.
    fn content(&self) -> String;

    /// Replaces the inner content.
    fn set_content(&self, content: &str);

    /// Enables or disables the control.
    fn set_disabled(&self, disabled: bool);

    /// Content saved before entering the loading state.
    fn stashed_content(&self) -> Option<String>;

    /// Saves content to restore later.
    fn stash_content(&self, content: &str);
}
