//! Tag Index
//!
//! The tag bar lists `"All"` first, then every distinct tag in the order it
//! first appears in the catalog.

use std::collections::HashSet;

use crate::domain::entities::ProjectRecord;
use crate::domain::value_objects::ALL_TAG;

/// Derive the ordered tag index of a record collection.
///
/// Empty input yields `["All"]`. A record tagged `"All"` does not add a
/// second entry; the sentinel already selects every record.
pub fn derive_tags(records: &[ProjectRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(ALL_TAG);

    let mut tags = vec![ALL_TAG.to_string()];
    for tag in records.iter().flat_map(|r| r.tags.iter()) {
        if seen.insert(tag.as_str()) {
            tags.push(tag.clone());
        }
    }
    tags
}
