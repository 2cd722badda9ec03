//! Filter Controller
//!
//! Owns the only mutable state of the catalog view: the active selection.
//! The visible subset is always recomputed from `(records, selection)`.

use crate::domain::entities::ProjectRecord;
use crate::domain::value_objects::Selection;

/// Records matching `selection`, in catalog order.
pub fn visible_records<'a>(
    records: &'a [ProjectRecord],
    selection: &Selection,
) -> Vec<&'a ProjectRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterController {
    selection: Selection,
}

impl FilterController {
    /// A fresh controller starts with `All` selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Select a tag. Tags absent from the catalog are accepted and simply
    /// match nothing.
    pub fn select_tag(&mut self, tag: &str) {
        self.selection = Selection::from_tag(tag);
    }

    pub fn select_all(&mut self) {
        self.selection = Selection::All;
    }

    pub fn is_active(&self, tag: &str) -> bool {
        self.selection.as_str() == tag
    }

    pub fn visible<'a>(&self, records: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        visible_records(records, &self.selection)
    }
}
