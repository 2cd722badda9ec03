//! Environment color-scheme detection
//!
//! A terminal has no `prefers-color-scheme` media query. The detector reads
//! `FOLIO_COLOR_SCHEME` (`dark` / `light`) first, then the `COLORFGBG`
//! convention (`fg;bg`, background 0-6 or 8 is dark), and falls back to light.

use crate::domain::ports::ColorSchemeDetector;

type EnvGetter = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

pub struct EnvColorScheme {
    get_env: EnvGetter,
}

impl EnvColorScheme {
    pub fn new() -> Self {
        Self::with_env(|key| std::env::var(key).ok())
    }

    pub fn with_env(get_env: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            get_env: Box::new(get_env),
        }
    }
}

impl Default for EnvColorScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSchemeDetector for EnvColorScheme {
    fn prefers_dark(&self) -> bool {
        if let Some(scheme) = (self.get_env)("FOLIO_COLOR_SCHEME") {
            match scheme.trim().to_ascii_lowercase().as_str() {
                "dark" => return true,
                "light" => return false,
                _ => {}
            }
        }

        (self.get_env)("COLORFGBG")
            .and_then(|value| {
                value
                    .rsplit(';')
                    .next()
                    .and_then(|bg| bg.trim().parse::<u8>().ok())
            })
            .is_some_and(|bg| bg <= 6 || bg == 8)
    }
}
