//! Application Layer
//!
//! Use cases that orchestrate the catalog flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Catalog` / `BrowseSession` - Load records once, then drive tag selection and reconciliation
//! - `PageRenderer` - Filter bar and card grid HTML for a session
//! - `ContactUseCase` - Contact form submission through an injected transport
//! - `ThemeService` - Theme resolution and persistence through an injected store
//! - `PersonaCheckUseCase` - Instruction file presence and references

pub mod catalog;
pub mod contact;
pub mod persona;
pub mod render;
pub mod theme;

pub use catalog::{BrowseSession, Catalog, FilterUpdate};
pub use contact::ContactUseCase;
pub use persona::{PersonaCheckUseCase, INDEX_FILE, INSTRUCTIONS_DIR};
pub use render::PageRenderer;
pub use theme::{ThemeResolution, ThemeService, ThemeSource, THEME_KEY};
