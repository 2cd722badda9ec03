//! Domain Entities

mod contact;
mod project;

pub use contact::{ContactFields, ContactForm, FailureKind, FormStatus, SubmitOutcome};
pub use project::{ProjectLinks, ProjectRecord};
