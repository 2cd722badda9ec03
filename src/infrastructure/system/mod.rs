//! Host environment detection

mod color_scheme;

pub use color_scheme::EnvColorScheme;
