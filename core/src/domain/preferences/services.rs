use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    preferences::{entities::Preferences, ports::KeyValueStore},
};

pub const PREFS_KEY: &str = "hf_prefs";
pub const FAVS_KEY: &str = "hf_favs";

/// Reads and writes planner preferences and favourite meals.
///
/// The two records are stored under separate keys and are not updated
/// atomically together. Corrupt or missing records fall back to defaults.
#[derive(Debug, Clone)]
pub struct PreferenceStore<S>
where
    S: KeyValueStore,
{
    store: S,
}

impl<S> PreferenceStore<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Preferences {
        let Some(raw) = self.store.get(PREFS_KEY) else {
            return Preferences::default();
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            debug!(error = %e, "Stored preferences are unreadable, using defaults");
            Preferences::default()
        })
    }

    pub fn save(&self, preferences: &Preferences) -> Result<(), CoreError> {
        let raw = serde_json::to_string(preferences)
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        self.store.set(PREFS_KEY, raw)
    }

    pub fn load_favourites(&self) -> Vec<String> {
        let Some(raw) = self.store.get(FAVS_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(stored) => {
                let mut favourites: Vec<String> = Vec::with_capacity(stored.len());
                for key in stored {
                    if !favourites.contains(&key) {
                        favourites.push(key);
                    }
                }
                favourites
            }
            Err(e) => {
                debug!(error = %e, "Stored favourites are unreadable, starting empty");
                Vec::new()
            }
        }
    }

    pub fn is_favourite(&self, key: &str) -> bool {
        self.load_favourites().iter().any(|f| f == key)
    }

    pub fn add_favourite(&self, key: &str) -> Result<Vec<String>, CoreError> {
        let mut favourites = self.load_favourites();
        if !favourites.iter().any(|f| f == key) {
            favourites.push(key.to_string());
        }
        self.save_favourites(&favourites)?;
        Ok(favourites)
    }

    pub fn remove_favourite(&self, key: &str) -> Result<Vec<String>, CoreError> {
        let mut favourites = self.load_favourites();
        favourites.retain(|f| f != key);
        self.save_favourites(&favourites)?;
        Ok(favourites)
    }

    /// Adds `key` when absent, removes it when present.
    pub fn toggle_favourite(&self, key: &str) -> Result<Vec<String>, CoreError> {
        if self.is_favourite(key) {
            self.remove_favourite(key)
        } else {
            self.add_favourite(key)
        }
    }

    fn save_favourites(&self, favourites: &[String]) -> Result<(), CoreError> {
        let raw = serde_json::to_string(favourites)
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        self.store.set(FAVS_KEY, raw)
    }
}
