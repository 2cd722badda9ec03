//! Theme Service
//!
//! Resolves the active theme from the persisted choice and the system
//! preference, and persists explicit changes.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::ports::{ColorSchemeDetector, KeyValueStore, StoreError};
use crate::domain::value_objects::Theme;

/// Default settings key for the persisted theme.
pub const THEME_KEY: &str = "theme";

/// Where the resolved theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSource {
    Stored,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeResolution {
    pub theme: Theme,
    pub source: ThemeSource,
}

pub struct ThemeService {
    store: Arc<dyn KeyValueStore>,
    detector: Arc<dyn ColorSchemeDetector>,
    key: String,
}

impl ThemeService {
    pub fn new(store: Arc<dyn KeyValueStore>, detector: Arc<dyn ColorSchemeDetector>) -> Self {
        Self {
            store,
            detector,
            key: THEME_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Dark when `"dark"` is stored, light for any other stored value,
    /// system preference when nothing is stored.
    pub fn resolve(&self) -> Result<ThemeResolution, StoreError> {
        let stored = self.store.get(&self.key)?.filter(|v| !v.is_empty());

        let resolution = match stored {
            Some(value) => ThemeResolution {
                theme: if value == Theme::Dark.as_str() {
                    Theme::Dark
                } else {
                    Theme::Light
                },
                source: ThemeSource::Stored,
            },
            None => ThemeResolution {
                theme: if self.detector.prefers_dark() {
                    Theme::Dark
                } else {
                    Theme::Light
                },
                source: ThemeSource::System,
            },
        };

        Ok(resolution)
    }

    /// Flip the resolved theme and persist the result.
    pub fn toggle(&self) -> Result<Theme, StoreError> {
        let next = self.resolve()?.theme.toggled();
        self.set(next)?;
        Ok(next)
    }

    pub fn set(&self, theme: Theme) -> Result<(), StoreError> {
        self.store.set(&self.key, theme.as_str())
    }
}
