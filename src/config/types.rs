//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::THEME_KEY;
use crate::domain::value_objects::Locale;
use crate::error::FolioResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("src/data/projects.json")
}

/// Contact form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub locale: Locale,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ContactConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            locale: Locale::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "https://formspree.io/f/your-id".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Theme persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_theme_key")]
    pub key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            key: default_theme_key(),
        }
    }
}

fn default_theme_key() -> String {
    THEME_KEY.to_string()
}

/// Persona instruction check configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaConfig {
    #[serde(default = "default_persona_root")]
    pub root: PathBuf,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            root: default_persona_root(),
        }
    }
}

fn default_persona_root() -> PathBuf {
    PathBuf::from(".github")
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub persona: PersonaConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FolioResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the layered config, reporting which file was used.
    ///
    /// An explicit path must exist; discovered files that fail to parse are errors.
    pub fn discover(project_root: &Path, explicit: Option<&Path>) -> FolioResult<LoadedConfig> {
        loader::discover(project_root, explicit)
    }

    /// Apply environment variable overrides (FOLIO_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Catalog path resolved against the project root.
    pub fn catalog_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.catalog.path)
    }

    /// Persona root resolved against the project root.
    pub fn persona_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.persona.root)
    }
}
