//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `repositories/` - JSON catalog source and TOML settings store
//! - `transport/` - HTTP form submission
//! - `system/` - Host environment detection (color scheme)

pub mod fs;
pub mod repositories;
pub mod system;
pub mod transport;

// Re-export for convenience
pub use fs::LocalFs;
pub use repositories::{JsonRecordSource, TomlKeyValueStore};
pub use system::EnvColorScheme;
pub use transport::HttpFormTransport;
