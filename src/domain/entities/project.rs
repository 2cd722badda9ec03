//! Project record entity
//!
//! One entry of the portfolio catalog, as supplied by the record source.
//! Records are immutable once loaded; slug uniqueness and URL-safety are
//! guaranteed by the data source and only checked by `folio validate`.

use serde::{Deserialize, Deserializer, Serialize};

/// Route prefix of the statically generated detail pages.
pub const DETAIL_ROUTE_PREFIX: &str = "/projects/";

/// Optional outbound links of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// A single project in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub slug: String,
    pub title: String,
    pub summary: String,
    /// Absent or `null` in the source document means "no tags".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ProjectLinks>,
}

impl ProjectRecord {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            summary: String::new(),
            tags: Vec::new(),
            cover: None,
            alt: None,
            links: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Cover image URL; an empty string counts as absent.
    pub fn cover(&self) -> Option<&str> {
        self.cover.as_deref().filter(|c| !c.is_empty())
    }

    /// Accessible image description: `alt` when non-empty, otherwise `title`.
    pub fn alt_text(&self) -> &str {
        self.alt
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or(&self.title)
    }

    /// Path of the static detail page for this record.
    pub fn detail_path(&self) -> String {
        format!("{}{}", DETAIL_ROUTE_PREFIX, self.slug)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
