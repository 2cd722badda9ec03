//! Property tests for card reconciliation.

use std::collections::HashSet;

use proptest::prelude::*;

use folio::diff;
use folio::domain::services::{ListReconciler, ViewPhase};

/// Distinct slugs drawn from a small pool, in random order.
fn subset() -> impl Strategy<Value = Vec<String>> {
    proptest::sample::subsequence(vec!["a", "b", "c", "d", "e", "f"], 0..=6)
        .prop_shuffle()
        .prop_map(|v| v.into_iter().map(str::to_string).collect())
}

fn refs(v: &[String]) -> impl Iterator<Item = &str> {
    v.iter().map(String::as_str)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the three classes partition prev ∪ next.
    #[test]
    fn property_classes_partition_the_union(prev in subset(), next in subset()) {
        let r = diff(refs(&prev), refs(&next));

        let entering: HashSet<&String> = r.entering.iter().collect();
        let leaving: HashSet<&String> = r.leaving.iter().collect();
        let persisting: HashSet<&String> = r.persisting.iter().collect();
        prop_assert!(entering.is_disjoint(&leaving));
        prop_assert!(entering.is_disjoint(&persisting));
        prop_assert!(leaving.is_disjoint(&persisting));

        let union: HashSet<&String> = prev.iter().chain(next.iter()).collect();
        let classified: HashSet<&String> = entering
            .union(&leaving)
            .copied()
            .chain(persisting.iter().copied())
            .collect();
        prop_assert_eq!(classified, union);
    }

    /// PROPERTY: entering and persisting rebuild next in order; leaving and
    /// persisting rebuild prev.
    #[test]
    fn property_classes_rebuild_both_sides(prev in subset(), next in subset()) {
        let r = diff(refs(&prev), refs(&next));

        let rebuilt_next: Vec<&String> = next
            .iter()
            .filter(|s| r.entering.contains(s) || r.persisting.contains(s))
            .collect();
        prop_assert_eq!(rebuilt_next.len(), next.len());
        prop_assert_eq!(r.entering.len() + r.persisting.len(), next.len());

        let prev_set: HashSet<&String> = prev.iter().collect();
        let rebuilt_prev: HashSet<&String> = r.leaving.iter().chain(r.persisting.iter()).collect();
        prop_assert_eq!(rebuilt_prev, prev_set);

        let in_next_order: Vec<&String> = next.iter().filter(|s| r.persisting.contains(s)).collect();
        let persisting: Vec<&String> = r.persisting.iter().collect();
        prop_assert_eq!(persisting, in_next_order);
    }

    /// PROPERTY: diffing a subset against itself changes nothing.
    #[test]
    fn property_identity_diff_is_unchanged(list in subset()) {
        let r = diff(refs(&list), refs(&list));
        prop_assert!(r.is_unchanged());
        prop_assert_eq!(r.persisting, list);
    }

    /// PROPERTY: after a change, mounted cards are next plus the leaving ones.
    #[test]
    fn property_phases_follow_membership(first in subset(), second in subset()) {
        let mut reconciler = ListReconciler::new();
        reconciler.apply(refs(&first));
        let change = reconciler.apply(refs(&second));

        for slug in &second {
            prop_assert!(matches!(
                reconciler.phase(slug),
                ViewPhase::Entering | ViewPhase::Present
            ));
        }
        for slug in &change.leaving {
            prop_assert_eq!(reconciler.phase(slug), ViewPhase::Leaving);
        }
        prop_assert_eq!(reconciler.visible(), &second[..]);
    }
}
