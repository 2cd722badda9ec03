//! Property tests for tag index derivation.

use std::collections::HashSet;

use proptest::prelude::*;

use folio::{derive_tags, ProjectRecord};

fn catalog() -> impl Strategy<Value = Vec<ProjectRecord>> {
    proptest::collection::vec(
        proptest::collection::vec(prop_oneof!["Rust", "React", "Vue", "Python", "All"], 0..4),
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

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: "All" is first and every entry is distinct.
    #[test]
    fn property_all_first_and_unique(records in catalog()) {
        let tags = derive_tags(&records);
        prop_assert_eq!(tags[0].as_str(), "All");

        let unique: HashSet<&String> = tags.iter().collect();
        prop_assert_eq!(unique.len(), tags.len());
    }

    /// PROPERTY: every record tag appears, and nothing else does.
    #[test]
    fn property_index_covers_exactly_the_record_tags(records in catalog()) {
        let tags: HashSet<String> = derive_tags(&records).into_iter().collect();
        let mut expected: HashSet<String> = records
            .iter()
            .flat_map(|r| r.tags.iter().cloned())
            .collect();
        expected.insert("All".to_string());
        prop_assert_eq!(tags, expected);
    }

    /// PROPERTY: tags keep their first-appearance order.
    #[test]
    fn property_first_appearance_order(records in catalog()) {
        let tags = derive_tags(&records);
        let mut first_seen: Vec<&str> = Vec::new();
        for tag in records.iter().flat_map(|r| r.tags.iter()) {
            if tag != "All" && !first_seen.contains(&tag.as_str()) {
                first_seen.push(tag);
            }
        }
        let derived: Vec<&str> = tags.iter().skip(1).map(String::as_str).collect();
        prop_assert_eq!(derived, first_seen);
    }
}
