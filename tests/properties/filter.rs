//! Property tests for the tag filter.

use proptest::prelude::*;

use folio::domain::services::FilterController;
use folio::{derive_tags, visible_records, ProjectRecord, Selection};

fn catalog() -> impl Strategy<Value = Vec<ProjectRecord>> {
    proptest::collection::vec(
        proptest::collection::vec(prop_oneof!["Rust", "React", "Vue"], 0..3),
        0..8,
    )
    .prop_map(|tag_lists| {
        tag_lists
            .into_iter()
            .enumerate()
            .map(|(i, tags)| ProjectRecord::new(format!("p{}", i), format!("P{}", i)).with_tags(tags))
            .collect()
    })
}

fn slugs(records: &[&ProjectRecord]) -> Vec<String> {
    records.iter().map(|r| r.slug.clone()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: "All" shows the whole catalog in order.
    #[test]
    fn property_all_is_identity(records in catalog()) {
        let visible = visible_records(&records, &Selection::All);
        let expected: Vec<String> = records.iter().map(|r| r.slug.clone()).collect();
        prop_assert_eq!(slugs(&visible), expected);
    }

    /// PROPERTY: a tag shows exactly the records carrying it, in catalog order.
    #[test]
    fn property_tag_selects_carriers(records in catalog(), tag in prop_oneof!["Rust", "React", "Vue", "Go"]) {
        let visible = visible_records(&records, &Selection::from_tag(tag.clone()));
        let expected: Vec<String> = records
            .iter()
            .filter(|r| r.tags.contains(&tag))
            .map(|r| r.slug.clone())
            .collect();
        prop_assert_eq!(slugs(&visible), expected);
    }

    /// PROPERTY: every index tag other than "All" selects at least one record.
    #[test]
    fn property_index_tags_are_never_empty(records in catalog()) {
        for tag in derive_tags(&records).into_iter().skip(1) {
            prop_assert!(!visible_records(&records, &Selection::from_tag(tag)).is_empty());
        }
    }

    /// PROPERTY: the controller's view depends only on its latest selection.
    #[test]
    fn property_controller_is_memoryless(
        records in catalog(),
        clicks in proptest::collection::vec(prop_oneof!["All", "Rust", "React", "Vue"], 1..6),
    ) {
        let mut controller = FilterController::new();
        for tag in &clicks {
            controller.select_tag(tag);
        }
        let last = clicks.last().unwrap();
        let fresh = visible_records(&records, &Selection::from_tag(last.clone()));
        prop_assert_eq!(slugs(&controller.visible(&records)), slugs(&fresh));
        prop_assert!(controller.is_active(last));
    }
}
