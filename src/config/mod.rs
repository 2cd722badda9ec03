//! Configuration module for Folio
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FOLIO_*)
//! 3. Project config (./folio.toml)
//! 4. User config (~/.config/folio/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{
    CatalogConfig, ColorMode, Config, ContactConfig, OutputConfig, PersonaConfig, ThemeConfig,
    Verbosity,
};
