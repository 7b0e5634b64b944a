//! Backend API configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Where the backend lives and where logout sends the user
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page opened after logout
    #[serde(default = "default_login_page")]
    pub login_page: String,
}

impl ApiConfig {
    /// Validate API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.login_page.trim().is_empty() {
            return Err(ValidationError::MissingRequired("api.login_page"));
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_page: default_login_page(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000/api/auth".to_string()
}

fn default_login_page() -> String {
    crate::application::DEFAULT_LOGIN_PAGE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api/auth");
        assert_eq!(config.login_page, "/pages/user_login.html");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_https_base_url_is_valid() {
        let config = ApiConfig {
            base_url: "https://edutech.example.com/api/auth".to_string(),
            ..ApiConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_http_base_url_rejected() {
        let config = ApiConfig {
            base_url: "ftp://example.com".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBaseUrl));
    }

    #[test]
    fn test_blank_login_page_rejected() {
        let config = ApiConfig {
            login_page: "  ".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }
}
