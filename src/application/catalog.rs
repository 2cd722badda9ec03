//! Catalog Use Case
//!
//! Holds the loaded record collection (read-only for the lifetime of the
//! view) together with its tag index, computed once at load. A
//! `BrowseSession` is one mounted view over the catalog: it owns the filter
//! selection and the reconciler, and resets to `All` when recreated.

use crate::domain::entities::ProjectRecord;
use crate::domain::ports::{RecordSource, RecordSourceError};
use crate::domain::services::{
    derive_tags, diff, visible_records, FilterController, ListReconciler, Reconciliation,
    ViewPhase,
};
use crate::domain::value_objects::Selection;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
    tags: Vec<String>,
}

impl Catalog {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        let tags = derive_tags(&records);
        Self { records, tags }
    }

    pub fn load(source: &dyn RecordSource) -> Result<Self, RecordSourceError> {
        Ok(Self::new(source.load()?))
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// `"All"` followed by every distinct tag in first-seen order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn visible(&self, selection: &Selection) -> Vec<&ProjectRecord> {
        visible_records(&self.records, selection)
    }

    /// Classify cards when switching from one selection to another.
    pub fn reconcile(&self, from: &Selection, to: &Selection) -> Reconciliation {
        let prev = self.visible(from);
        let next = self.visible(to);
        diff(
            prev.iter().map(|r| r.slug.as_str()),
            next.iter().map(|r| r.slug.as_str()),
        )
    }

    /// Mount a fresh view over the catalog.
    pub fn browse(&self) -> BrowseSession<'_> {
        BrowseSession::mount(self)
    }
}

/// Result of one selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterUpdate<'a> {
    pub selection: Selection,
    pub visible: Vec<&'a ProjectRecord>,
    pub changes: Reconciliation,
}

#[derive(Debug, Clone)]
pub struct BrowseSession<'a> {
    catalog: &'a Catalog,
    controller: FilterController,
    reconciler: ListReconciler,
}

impl<'a> BrowseSession<'a> {
    /// Mounting shows every record, each entering.
    pub fn mount(catalog: &'a Catalog) -> Self {
        let mut session = Self {
            catalog,
            controller: FilterController::new(),
            reconciler: ListReconciler::new(),
        };
        session.refresh();
        session
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn selection(&self) -> &Selection {
        self.controller.selection()
    }

    pub fn is_active(&self, tag: &str) -> bool {
        self.controller.is_active(tag)
    }

    pub fn select_tag(&mut self, tag: &str) -> FilterUpdate<'a> {
        self.controller.select_tag(tag);
        self.refresh()
    }

    pub fn select_all(&mut self) -> FilterUpdate<'a> {
        self.controller.select_all();
        self.refresh()
    }

    pub fn visible(&self) -> Vec<&'a ProjectRecord> {
        self.controller.visible(self.catalog.records())
    }

    pub fn phase(&self, slug: &str) -> ViewPhase {
        self.reconciler.phase(slug)
    }

    /// Mounted records paired with their current phase, in catalog order.
    ///
    /// Cards removed by the last selection change stay mounted as `Leaving`
    /// until the next change, so the grid can animate them out.
    pub fn cards(&self) -> Vec<(&'a ProjectRecord, ViewPhase)> {
        self.catalog
            .records()
            .iter()
            .map(|r| (r, self.reconciler.phase(&r.slug)))
            .filter(|(_, phase)| phase.is_mounted())
            .collect()
    }

    fn refresh(&mut self) -> FilterUpdate<'a> {
        let visible = self.visible();
        let changes = self
            .reconciler
            .apply(visible.iter().map(|r| r.slug.as_str()));
        FilterUpdate {
            selection: self.controller.selection().clone(),
            visible,
            changes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample() -> Catalog {
        Catalog::new(vec![
            ProjectRecord::new("a", "A").with_tags(["React"]),
            ProjectRecord::new("b", "B").with_tags(["Vue"]),
            ProjectRecord::new("c", "C").with_tags(["React", "Python"]),
        ])
    }

    struct FailingSource;

    impl RecordSource for FailingSource {
        fn load(&self) -> Result<Vec<ProjectRecord>, RecordSourceError> {
            Err(RecordSourceError::NotFound {
                path: PathBuf::from("projects.json"),
            })
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[test]
    fn tags_are_derived_once_at_construction() {
        assert_eq!(sample().tags(), ["All", "React", "Vue", "Python"]);
    }

    #[test]
    fn load_propagates_source_errors() {
        let err = Catalog::load(&FailingSource).unwrap_err();
        assert!(matches!(err, RecordSourceError::NotFound { .. }));
    }

    #[test]
    fn reconcile_between_selections() {
        let catalog = sample();
        let result = catalog.reconcile(&Selection::All, &Selection::from_tag("React"));
        assert!(result.entering.is_empty());
        assert_eq!(result.leaving, vec!["b"]);
        assert_eq!(result.persisting, vec!["a", "c"]);
    }

    #[test]
    fn session_starts_with_all_entering() {
        let catalog = sample();
        let session = catalog.browse();
        assert!(session.selection().is_all());
        assert_eq!(session.visible().len(), 3);
        assert!(session
            .cards()
            .iter()
            .all(|(_, phase)| *phase == ViewPhase::Entering));
    }

    #[test]
    fn select_tag_reports_changes() {
        let catalog = sample();
        let mut session = catalog.browse();

        let update = session.select_tag("React");
        let slugs: Vec<&str> = update.visible.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "c"]);
        assert_eq!(update.changes.leaving, vec!["b"]);
        assert_eq!(session.phase("b"), ViewPhase::Leaving);
        assert_eq!(session.phase("a"), ViewPhase::Present);
    }

    #[test]
    fn leaving_cards_stay_mounted_for_one_change() {
        let catalog = sample();
        let mut session = catalog.browse();

        session.select_tag("React");
        let cards: Vec<(&str, ViewPhase)> = session
            .cards()
            .iter()
            .map(|(r, phase)| (r.slug.as_str(), *phase))
            .collect();
        assert_eq!(
            cards,
            vec![
                ("a", ViewPhase::Present),
                ("b", ViewPhase::Leaving),
                ("c", ViewPhase::Present),
            ]
        );

        session.select_tag("Python");
        let slugs: Vec<&str> = session.cards().iter().map(|(r, _)| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "c"]);
        assert_eq!(session.phase("a"), ViewPhase::Leaving);
        assert_eq!(session.phase("b"), ViewPhase::Absent);
    }

    #[test]
    fn select_all_after_tag_restores_catalog() {
        let catalog = sample();
        let mut session = catalog.browse();
        session.select_tag("Vue");
        let update = session.select_all();
        assert_eq!(update.visible.len(), 3);
        assert_eq!(update.changes.entering, vec!["a", "c"]);
        assert!(session.is_active("All"));
    }

    #[test]
    fn remount_resets_selection() {
        let catalog = sample();
        let mut session = catalog.browse();
        session.select_tag("Python");
        drop(session);
        assert!(catalog.browse().selection().is_all());
    }
}
