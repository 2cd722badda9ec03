//! TOML Settings Store
//!
//! Persists small string settings (the theme choice) at
//! `~/.config/folio/settings.toml`.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use fs2::FileExt;

use crate::domain::ports::{KeyValueStore, StoreError};
use crate::infrastructure::fs::atomic_write;

type Settings = BTreeMap<String, String>;

pub struct TomlKeyValueStore {
    path: PathBuf,
}

impl TomlKeyValueStore {
    pub fn new() -> Self {
        Self {
            path: default_settings_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn load_from_disk(&self) -> Result<Settings, StoreError> {
        if !self.path.exists() {
            return Ok(Settings::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::AccessError {
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| StoreError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn save_to_disk(&self, settings: &Settings) -> Result<(), StoreError> {
        let content =
            toml::to_string_pretty(settings).map_err(|e| StoreError::SerializationError {
                message: e.to_string(),
            })?;

        atomic_write(&self.path, content.as_bytes()).map_err(|e| StoreError::AccessError {
            message: e.to_string(),
        })
    }
}

impl Default for TomlKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for TomlKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load_from_disk()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::AccessError {
                message: e.to_string(),
            })?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(|e| StoreError::AccessError {
            message: e.to_string(),
        })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| StoreError::AccessError {
                message: e.to_string(),
            })?;

        let result = self.load_from_disk().and_then(|mut settings| {
            settings.insert(key.to_string(), value.to_string());
            self.save_to_disk(&settings)
        });

        let _ = lock_file.unlock();
        result
    }
}

/// `FOLIO_SETTINGS_PATH` when set, else the user config directory.
pub fn default_settings_path() -> PathBuf {
    if let Ok(path) = std::env::var("FOLIO_SETTINGS_PATH") {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .map(|d| d.join("folio/settings.toml"))
        .unwrap_or_else(|| PathBuf::from("~/.config/folio/settings.toml"))
}
