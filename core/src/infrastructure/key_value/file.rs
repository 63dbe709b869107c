use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing::debug;

use crate::domain::{common::entities::app_errors::CoreError, preferences::ports::KeyValueStore};

/// Key-value store persisted as a single JSON object on disk.
///
/// An unreadable file is treated as empty and is replaced on the next write.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return BTreeMap::new(),
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            debug!(path = %self.path.display(), error = %e, "Ignoring unreadable store file");
            BTreeMap::new()
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| CoreError::StorageError(e.to_string()))?;
        }

        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, raw).map_err(|e| CoreError::StorageError(e.to_string()))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| CoreError::StorageError(e.to_string()))
    }

    fn update<F>(&self, change: F) -> Result<(), CoreError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| CoreError::StorageError("store file lock poisoned".to_string()))?;

        let mut entries = self.read_entries();
        change(&mut entries);
        self.write_entries(&entries)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().remove(key)
    }

    fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value);
        })
    }

    fn delete(&self, key: &str) -> Result<(), CoreError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}
