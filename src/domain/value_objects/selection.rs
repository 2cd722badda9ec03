//! Selection value object - the active tag filter
//!
//! - `All`: no filter applied (the sentinel shown first in the tag bar)
//! - `Tag`: exactly one concrete tag

use serde::{Serialize, Serializer};

use crate::domain::entities::ProjectRecord;

/// Label of the "no filter" entry in the tag index.
pub const ALL_TAG: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    All,
    Tag(String),
}

impl Selection {
    /// Build a selection from a tag label. The literal `"All"` maps to [`Selection::All`].
    pub fn from_tag(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if tag == ALL_TAG {
            Selection::All
        } else {
            Selection::Tag(tag)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => ALL_TAG,
            Selection::Tag(tag) => tag,
        }
    }

    /// Filter rule: everything matches `All`, otherwise the tag must be present.
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        match self {
            Selection::All => true,
            Selection::Tag(tag) => record.has_tag(tag),
        }
    }
}

impl From<&str> for Selection {
    fn from(tag: &str) -> Self {
        Selection::from_tag(tag)
    }
}

impl From<Option<String>> for Selection {
    fn from(tag: Option<String>) -> Self {
        tag.map(Selection::from_tag).unwrap_or_default()
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
