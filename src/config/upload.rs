//! Upload pre-check configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::validation::UploadPolicy;

/// Rules for the advisory upload check
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Allowed file extensions (comma-separated)
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: String,

    /// Largest accepted file in bytes
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
}

impl UploadConfig {
    /// Get allowed extensions as a vector
    pub fn extensions_list(&self) -> Vec<String> {
        self.allowed_extensions
            .split(',')
            .map(|s| s.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn policy(&self) -> UploadPolicy {
        UploadPolicy::new(self.extensions_list(), self.max_bytes)
    }

    /// Validate upload configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_bytes == 0 {
            return Err(ValidationError::InvalidUploadLimit);
        }
        if self.extensions_list().is_empty() {
            return Err(ValidationError::NoUploadExtensions);
        }
        Ok(())
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: default_allowed_extensions(),
            max_bytes: default_max_bytes(),
        }
    }
}

fn default_allowed_extensions() -> String {
    "pdf,mp4,mov,avi,mkv".to_string()
}

fn default_max_bytes() -> u64 {
    16 * 1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_defaults() {
        let config = UploadConfig::default();
        assert_eq!(config.extensions_list(), vec!["pdf", "mp4", "mov", "avi", "mkv"]);
        assert_eq!(config.max_bytes, 16_777_216);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_extension_list_is_normalised() {
        let config = UploadConfig {
            allowed_extensions: " .PDF, docx ,,".to_string(),
            ..UploadConfig::default()
        };
        assert_eq!(config.extensions_list(), vec!["pdf", "docx"]);
    }

    #[test]
    fn test_policy_uses_configured_rules() {
        let config = UploadConfig {
            allowed_extensions: "txt".to_string(),
            max_bytes: 10,
        };
        let policy = config.policy();
        assert!(policy.check("notes.txt", 10).is_ok());
        assert!(policy.check("notes.pdf", 1).is_err());
        assert!(policy.check("notes.txt", 11).is_err());
    }

    #[test]
    fn test_empty_extension_list_rejected() {
        let config = UploadConfig {
            allowed_extensions: " , ".to_string(),
            ..UploadConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::NoUploadExtensions));
    }
}
