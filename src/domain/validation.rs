//! Advisory form-field validators.
//!
//! Pure predicates a page runs before submitting. The backend remains the
//! authority; nothing here ever stops the gateway from sending a request.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::ValidationError;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// True for strings shaped like `local@domain.tld` (not full RFC validity).
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_SHAPE.is_match(s)
}

/// True if the password has at least eight characters. No complexity rules.
pub fn is_valid_password(s: &str) -> bool {
    s.chars().count() >= MIN_PASSWORD_LENGTH
}

/// True if anything but whitespace remains after trimming.
pub fn is_non_empty(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Client-side mirror of the backend's upload restrictions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    allowed_extensions: Vec<String>,
    max_bytes: u64,
}

impl UploadPolicy {
    /// Creates a policy; extensions are compared case-insensitively.
    pub fn new<I, S>(allowed_extensions: I, max_bytes: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            max_bytes,
        }
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// True if the file name ends in an allowed extension.
    pub fn allows_extension(&self, file_name: &str) -> bool {
        match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => {
                let ext = ext.to_ascii_lowercase();
                self.allowed_extensions.iter().any(|allowed| *allowed == ext)
            }
            _ => false,
        }
    }

    /// Checks a prospective upload.
    pub fn check(&self, file_name: &str, size: u64) -> Result<(), ValidationError> {
        if !is_non_empty(file_name) {
            return Err(ValidationError::empty_field("file_name"));
        }
        if !self.allows_extension(file_name) {
            return Err(ValidationError::invalid_format(
                "file_name",
                format!("allowed types are {}", self.allowed_extensions.join(", ")),
            ));
        }
        if size > self.max_bytes {
            return Err(ValidationError::too_large("file", self.max_bytes, size));
        }
        Ok(())
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(["pdf", "mp4", "mov", "avi", "mkv"], 16 * 1024 * 1024)
    }
}
