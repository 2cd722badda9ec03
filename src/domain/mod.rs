//! Domain Layer
//!
//! This is the core of Folio - pure catalog logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (ProjectRecord, ContactForm)
//! - `value_objects/` - Immutable value types (Selection, Theme, Locale)
//! - `services/` - Domain services (TagIndex, FilterController, CardRenderer, ListReconciler)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Derived state** - Visible subsets and reconciliations are recomputed, never cached
//! 3. **Ports & Adapters** - Record loading, storage and submission go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
