//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod color_scheme;
pub mod file_system;
pub mod key_value_store;
pub mod record_source;
pub mod submission_transport;

pub use color_scheme::ColorSchemeDetector;
pub use file_system::{FileSystem, FsError, FsResult};
pub use key_value_store::{KeyValueStore, StoreError};
pub use record_source::{RecordSource, RecordSourceError};
pub use submission_transport::{SubmissionReceipt, SubmissionTransport, TransportError};
