//! Folio - portfolio catalog toolkit
//!
//! Folio loads a static project catalog, derives its tag index, drives the
//! tag filter and card reconciliation, and renders cards to static HTML. The
//! site's small collaborators (contact form, theme preference, persona file
//! check) sit behind injectable ports.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BrowseSession, Catalog, ContactUseCase, PageRenderer, ThemeService};
pub use config::Config;
pub use domain::entities::{ContactFields, ContactForm, ProjectRecord};
pub use domain::services::{derive_tags, diff, visible_records, Reconciliation};
pub use domain::value_objects::{Locale, Selection, Theme};
pub use error::{FolioError, FolioResult};
