//! Notification severity and its visual treatment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a notification is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

/// Icon and utility classes applied to a notification element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
    pub icon: char,
    pub classes: &'static [&'static str],
}

impl Severity {
    /// Returns the icon and colour classes for this severity.
    pub fn style(&self) -> SeverityStyle {
        match self {
            Severity::Success => SeverityStyle {
                icon: '✓',
                classes: &["bg-green-100", "text-green-800", "border", "border-green-200"],
            },
            Severity::Error => SeverityStyle {
                icon: '✕',
                classes: &["bg-red-100", "text-red-800", "border", "border-red-200"],
            },
            Severity::Info => SeverityStyle {
                icon: 'ℹ',
                classes: &["bg-blue-100", "text-blue-800", "border", "border-blue-200"],
            },
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        };
        write!(f, "{}", s)
    }
}
