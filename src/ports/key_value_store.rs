//! Key-Value Store Port - string storage scopes.
//!
//! Models a browser storage area (`localStorage` / `sessionStorage`): string
//! keys to string values, no expiry. The session store writes one key into
//! one of two such scopes.

use async_trait::async_trait;

/// Errors a storage scope can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage IO error: {0}")]
    Io(String),

    #[error("Storage contents corrupted: {0}")]
    Corrupted(String),
}

impl StorageError {
    pub fn io(message: impl Into<String>) -> Self {
        StorageError::Io(message.into())
    }
}

/// One persistence scope.
///
/// # Contract
///
/// - `get` of a missing key is `Ok(None)`, never an error
/// - `remove` of a missing key succeeds
/// - `set` replaces any previous value
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key`.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
