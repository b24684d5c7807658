use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::DEFAULT_STORAGE_KEY;
use crate::task::Task;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read {key}: {message}")]
    Read { key: String, message: String },

    #[error("failed to write {key}: {message}")]
    Write { key: String, message: String },

    #[error("failed to encode task list: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("stored task list is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("stored task list is invalid: {0}")]
    Invalid(String),
}

/// Where the task list lives between page loads.
pub trait TaskStorage {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<Task>>, StorageError>;

    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError>;
}

/// Synchronous string-keyed store, the shape of `window.localStorage`.
pub trait KeyValueBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Keeps the whole list as one JSON array under a single key.
#[derive(Debug, Clone)]
pub struct JsonTaskStorage<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueBackend> JsonTaskStorage<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn with_default_key(backend: B) -> Self {
        Self::new(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: KeyValueBackend> TaskStorage for JsonTaskStorage<B> {
    #[tracing::instrument(skip(self), fields(key = %self.key))]
    fn load(&self) -> Result<Option<Vec<Task>>, StorageError> {
        let Some(raw) = self.backend.get_item(&self.key)? else {
            debug!("no stored task list");
            return Ok(None);
        };

        let tasks = decode(&raw)?;
        info!(count = tasks.len(), "loaded task list");
        Ok(Some(tasks))
    }

    #[tracing::instrument(skip(self, tasks), fields(key = %self.key, count = tasks.len()))]
    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        let json = encode(tasks)?;
        self.backend.set_item(&self.key, &json)?;
        debug!(bytes = json.len(), "saved task list");
        Ok(())
    }
}

pub fn encode(tasks: &[Task]) -> Result<String, StorageError> {
    serde_json::to_string(tasks).map_err(StorageError::Encode)
}

/// Parses a stored list and rejects blank task text. Duplicate ids are
/// left for the store to reassign on open.
pub fn decode(raw: &str) -> Result<Vec<Task>, StorageError> {
    let tasks: Vec<Task> = serde_json::from_str(raw).map_err(StorageError::Malformed)?;

    if let Some(task) = tasks.iter().find(|task| task.text.trim().is_empty()) {
        return Err(StorageError::Invalid(format!(
            "task {} has blank text",
            task.id
        )));
    }

    Ok(tasks)
}

/// In-process backend. Every successful write is recorded so callers can
/// observe exactly when the store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: BTreeMap<String, String>,
    writes: Vec<(String, String)>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a key as if a previous session had written it.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut backend = Self::default();
        backend.entries.insert(key.into(), value.into());
        backend
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
