//! ColorSchemeDetector port
//!
//! System color-scheme preference, consulted when no theme has been stored.

pub trait ColorSchemeDetector {
    fn prefers_dark(&self) -> bool;
}
