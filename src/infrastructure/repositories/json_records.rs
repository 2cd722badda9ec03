//! JSON Record Source
//!
//! Reads the catalog from a JSON array file (`src/data/projects.json` by default).

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::ProjectRecord;
use crate::domain::ports::{RecordSource, RecordSourceError};

pub struct JsonRecordSource {
    path: PathBuf,
}

impl JsonRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonRecordSource {
    fn load(&self) -> Result<Vec<ProjectRecord>, RecordSourceError> {
        if !self.path.exists() {
            return Err(RecordSourceError::NotFound {
                path: self.path.clone(),
            });
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| RecordSourceError::Unreadable {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| RecordSourceError::Malformed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
