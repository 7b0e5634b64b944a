//! UI adapters.
//!
//! - `RecordingSurface` / `ConsoleSurface` - notification rendering
//! - `RecordingNavigator` / `LogNavigator` - page navigation
//! - `InMemoryControl` - a loadable control
//! - `ManualDocument` - document readiness

mod control;
mod document;
mod navigator;
mod surface;

pub use control::InMemoryControl;
pub use document::ManualDocument;
pub use navigator::{LogNavigator, RecordingNavigator};
pub use surface::{ConsoleSurface, RecordingSurface, RenderedToast, SurfaceEvent};
