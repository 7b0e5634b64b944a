//! Display lifecycle of a single notification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Where a notification is in its insert/animate/remove choreography.
///
/// ```text
/// Created ──frame──▶ Visible ──ttl or dismiss──▶ Dismissing ──transition──▶ Removed
///    └──────────────dismiss before first frame──────▲
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    /// Mounted with its entrance classes, not yet animated in.
    Created,
    /// Entrance transition applied.
    Visible,
    /// Exit transition applied, waiting to be detached.
    Dismissing,
    /// Detached from the surface.
    Removed,
}

impl NotificationStatus {
    /// Transition classes the surface applies in this state.
    pub fn transition_classes(&self) -> &'static [&'static str] {
        match self {
            NotificationStatus::Visible => &["opacity-100", "translate-x-0"],
            NotificationStatus::Created
            | NotificationStatus::Dismissing
            | NotificationStatus::Removed => &["opacity-0", "translate-x-10"],
        }
    }

    /// True while the element is still attached.
    pub fn is_mounted(&self) -> bool {
        !matches!(self, NotificationStatus::Removed)
    }

    /// True if a dismissal request would start the exit transition.
    pub fn is_dismissible(&self) -> bool {
        matches!(self, NotificationStatus::Created | NotificationStatus::Visible)
    }
}

impl StateMachine for NotificationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use NotificationStatus::*;
        matches!(
            (self, target),
            (Created, Visible) | (Created, Dismissing) | (Visible, Dismissing) | (Dismissing, Removed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use NotificationStatus::*;
        match self {
            Created => vec![Visible, Dismissing],
            Visible => vec![Dismissing],
            Dismissing => vec![Removed],
            Removed => vec![],
        }
    }
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NotificationStatus::Created => "created",
            NotificationStatus::Visible => "visible",
            NotificationStatus::Dismissing => "dismissing",
            NotificationStatus::Removed => "removed",
        };
        write!(f, "{}", s)
    }
}
