//! Domain Services
//!
//! Pure catalog logic operating on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod card;
mod escaping;
mod filter;
mod persona;
mod reconciler;
mod tag_index;
mod validator;

pub use card::{CardImage, CardRenderer, CardView, COVER_HEIGHT, COVER_WIDTH};
pub use escaping::escape_html;
pub use filter::{visible_records, FilterController};
pub use persona::{PersonaReport, PERSONA_FILES};
pub use reconciler::{diff, ListReconciler, Reconciliation, ViewPhase};
pub use tag_index::derive_tags;
pub use validator::{validate_catalog, CheckStatus, ValidationCheck, ValidationReport};
