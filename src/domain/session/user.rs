//! User record and role as returned by the login endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The `user` object of a login response.
///
/// Known fields are typed; anything else the backend sends (such as `grade`)
/// is kept in `extra` so a stored session round-trips without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// Creates a record with only an ID.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            username: None,
            email: None,
            role: None,
            extra: Map::new(),
        }
    }

    /// Parses the role string, if it is one the platform knows.
    pub fn role(&self) -> Option<UserRole> {
        self.role.as_deref().and_then(UserRole::parse)
    }
}

/// Platform roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    /// Parses a lowercase role name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "student" => Some(UserRole::Student),
            "teacher" => Some(UserRole::Teacher),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }

    /// Landing page the backend redirects each role to after login.
    pub fn dashboard_page(&self) -> &'static str {
        match self {
            UserRole::Student => "student_dashboard.html",
            UserRole::Teacher => "teacher_dashboard.html",
            UserRole::Admin => "admin_control_panel.html",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
            UserRole::Admin => "admin",
        };
        write!(f, "{}", s)
    }
}
