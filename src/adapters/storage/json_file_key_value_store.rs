//! JSON-file key-value store.
//!
//! The durable scope: every key lives in one JSON object on disk, so the
//! session survives restarts the way `localStorage` does. Writes go to a
//! temporary sibling file that is then renamed over the original, so a crash
//! mid-write leaves the previous contents intact.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::warn;

use crate::ports::{KeyValueStore, StorageError};

/// File-backed storage scope.
#[derive(Debug)]
pub struct JsonFileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl JsonFileKeyValueStore {
    /// Creates a store backed by `path`. The file is created on first write.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_all(&self) -> Result<Map<String, Value>, StorageError> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(StorageError::io(e.to_string())),
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StorageError::Corrupted(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(StorageError::Corrupted(e.to_string())),
        }
    }

    /// Like `read_all`, but unreadable contents count as empty so the next
    /// write replaces them. The flag reports whether that happened. I/O
    /// failures still surface.
    async fn read_for_write(&self) -> Result<(Map<String, Value>, bool), StorageError> {
        match self.read_all().await {
            Ok(entries) => Ok((entries, false)),
            Err(StorageError::Corrupted(reason)) => {
                warn!(path = %self.path.display(), %reason, "Overwriting corrupted storage file");
                Ok((Map::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    async fn write_all(&self, entries: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StorageError::io(e.to_string()))?;
            }
        }

        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| StorageError::io(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, json)
            .await
            .map_err(|e| StorageError::io(e.to_string()))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| StorageError::io(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().await;
        let entries = self.read_all().await?;
        Ok(entries.get(key).and_then(Value::as_str).map(str::to_string))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let (mut entries, _) = self.read_for_write().await?;
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.write_all(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let (mut entries, corrupted) = self.read_for_write().await?;
        if entries.remove(key).is_none() && !corrupted {
            return Ok(());
        }
        self.write_all(&entries).await
    }
}
