//! Persistence scopes for the session.

use std::fmt;

/// Where a session is written.
///
/// Reads always consult `Durable` first, then `Tab`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PersistenceScope {
    /// Survives restarts (browser `localStorage`).
    #[default]
    Durable,
    /// Lives as long as the tab or process (browser `sessionStorage`).
    Tab,
}

impl PersistenceScope {
    /// Maps the "remember me" flag of a login form to a scope.
    pub fn from_persistent(persistent: bool) -> Self {
        if persistent {
            PersistenceScope::Durable
        } else {
            PersistenceScope::Tab
        }
    }

    /// Scopes in read-precedence order.
    pub fn read_order() -> [PersistenceScope; 2] {
        [PersistenceScope::Durable, PersistenceScope::Tab]
    }
}

impl fmt::Display for PersistenceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PersistenceScope::Durable => "durable",
            PersistenceScope::Tab => "tab",
        };
        write!(f, "{}", s)
    }
}
