//! Value Objects
//!
//! Immutable types with no identity of their own.

mod locale;
mod selection;
mod theme;

pub use locale::{Locale, Messages};
pub use selection::{Selection, ALL_TAG};
pub use theme::Theme;
