//! Session persistence configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where sessions are stored
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Key the session is stored under in both scopes
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// File backing the durable scope
    #[serde(default = "default_durable_path")]
    pub durable_path: PathBuf,
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.storage_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("session.storage_key"));
        }
        if self.durable_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("session.durable_path"));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            durable_path: default_durable_path(),
        }
    }
}

fn default_storage_key() -> String {
    crate::application::DEFAULT_SESSION_KEY.to_string()
}

fn default_durable_path() -> PathBuf {
    PathBuf::from(".edutech/session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.storage_key, "edutech_session");
        assert_eq!(config.durable_path, PathBuf::from(".edutech/session.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_storage_key_rejected() {
        let config = SessionConfig {
            storage_key: String::new(),
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
