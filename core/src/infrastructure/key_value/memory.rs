use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use crate::domain::{common::entities::app_errors::CoreError, preferences::ports::KeyValueStore};

#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CoreError::StorageError("key-value store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CoreError::StorageError("key-value store lock poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
