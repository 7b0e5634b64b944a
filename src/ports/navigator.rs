//! Navigator Port - full-page redirects.

/// Performs page navigation.
pub trait Navigator: Send + Sync {
    /// Replaces the current page with `location`.
    fn navigate(&self, location: &str);
}
