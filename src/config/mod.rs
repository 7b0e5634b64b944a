//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `EDUTECH_` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment yields a working config.
//!
//! # Example
//!
//! ```no_run
//! use edutech_client::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Backend at {}", config.api.base_url);
//! ```

mod api;
mod error;
mod logging;
mod notifications;
mod session;
mod upload;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use notifications::NotificationsConfig;
pub use session::SessionConfig;
pub use upload::UploadConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Backend location and login page
    #[serde(default)]
    pub api: ApiConfig,

    /// Session storage key and durable file
    #[serde(default)]
    pub session: SessionConfig,

    /// Toast timings
    #[serde(default)]
    pub notifications: NotificationsConfig,

    /// Advisory upload rules
    #[serde(default)]
    pub upload: UploadConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `EDUTECH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `EDUTECH__API__BASE_URL=https://...` -> `api.base_url = https://...`
    /// - `EDUTECH__NOTIFICATIONS__DEFAULT_TTL_MS=3000` -> `notifications.default_ttl_ms = 3000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EDUTECH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.session.validate()?;
        self.notifications.validate()?;
        self.upload.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "EDUTECH__API__BASE_URL",
        "EDUTECH__API__LOGIN_PAGE",
        "EDUTECH__SESSION__STORAGE_KEY",
        "EDUTECH__NOTIFICATIONS__DEFAULT_TTL_MS",
        "EDUTECH__UPLOAD__MAX_BYTES",
        "EDUTECH__LOGGING__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000/api/auth");
        assert_eq!(config.session.storage_key, "edutech_session");
        assert_eq!(config.notifications.default_ttl_ms, 5000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("EDUTECH__API__BASE_URL", "https://edu.example.com/api/auth");
        env::set_var("EDUTECH__NOTIFICATIONS__DEFAULT_TTL_MS", "3000");
        env::set_var("EDUTECH__UPLOAD__MAX_BYTES", "1024");
        env::set_var("EDUTECH__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api.base_url, "https://edu.example.com/api/auth");
        assert_eq!(config.api.login_page, "/pages/user_login.html");
        assert_eq!(config.notifications.default_ttl_ms, 3000);
        assert_eq!(config.upload.max_bytes, 1024);
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_reports_bad_base_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("EDUTECH__API__BASE_URL", "localhost:5000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidBaseUrl));
    }

    #[test]
    fn test_unparseable_number_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("EDUTECH__NOTIFICATIONS__DEFAULT_TTL_MS", "soon");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
