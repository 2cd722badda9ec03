//! KeyValueStore port
//!
//! Small persistent string settings (the theme choice). Stands in for the
//! browser's local storage so any persistent store can back it.

use std::path::PathBuf;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to access settings: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize settings: {message}")]
    SerializationError { message: String },

    #[error(
        "settings file corrupted: {path}\n  → Fix: Delete the file; it is recreated on the next change\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
