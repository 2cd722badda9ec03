//! RecordSource port
//!
//! Supplies the ordered project collection once, at load time.

use std::path::PathBuf;

use crate::domain::entities::ProjectRecord;

pub trait RecordSource {
    /// Load every record, preserving document order.
    fn load(&self) -> Result<Vec<ProjectRecord>, RecordSourceError>;

    /// Human-readable origin (file path, URL, ...)
    fn describe(&self) -> String;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordSourceError {
    #[error("catalog not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read catalog {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error(
        "catalog is not a valid project list: {path}\n  → Fix: the file must be a JSON array of {{slug, title, summary, tags, cover}} objects\n  → Details: {message}"
    )]
    Malformed { path: PathBuf, message: String },
}
