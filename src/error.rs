//! Error types for Folio
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, RecordSourceError, StoreError, TransportError};

/// Result type alias for Folio operations
pub type FolioResult<T> = Result<T, FolioError>;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Config file is not valid TOML or has values of the wrong type
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Catalog could not be loaded
    #[error(transparent)]
    Catalog(#[from] RecordSourceError),

    /// Settings store failure
    #[error(transparent)]
    Settings(#[from] StoreError),

    /// Contact transport could not be built
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// File system failure outside the catalog
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Contact endpoint configured as an empty string
    #[error("contact endpoint is not configured\n  → Fix: set [contact] endpoint in folio.toml or FOLIO_CONTACT_ENDPOINT")]
    MissingEndpoint,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
