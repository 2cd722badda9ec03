//! Catalog data-quality checks
//!
//! The core never rejects a catalog; these checks report data problems for
//! `folio validate` and CI. Summary length is a soft contract and only warns.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::entities::ProjectRecord;

const SUMMARY_MIN_EXCLUSIVE: usize = 10;
const SUMMARY_MAX_EXCLUSIVE: usize = 300;

/// Status of a validation check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "✓"),
            CheckStatus::Warning => write!(f, "⚠"),
            CheckStatus::Error => write!(f, "✗"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationCheck {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    /// Offending slugs (or positions, when the slug itself is the problem)
    pub details: Vec<String>,
}

impl ValidationCheck {
    fn from_offenders(
        name: &str,
        failing: CheckStatus,
        offenders: Vec<String>,
        ok: &str,
        bad: &str,
    ) -> Self {
        if offenders.is_empty() {
            Self {
                name: name.to_string(),
                status: CheckStatus::Pass,
                message: ok.to_string(),
                details: Vec::new(),
            }
        } else {
            Self {
                name: name.to_string(),
                status: failing,
                message: format!("{} ({})", bad, offenders.len()),
                details: offenders,
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub checks: Vec<ValidationCheck>,
}

impl ValidationReport {
    pub fn passes(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    pub fn warnings(&self) -> usize {
        self.count(CheckStatus::Warning)
    }

    pub fn errors(&self) -> usize {
        self.count(CheckStatus::Error)
    }

    pub fn is_success(&self) -> bool {
        self.errors() == 0
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }
}

/// Run every data-quality check over the catalog.
pub fn validate_catalog(records: &[ProjectRecord]) -> ValidationReport {
    let mut checks = Vec::new();

    checks.push(if records.is_empty() {
        ValidationCheck {
            name: "records".to_string(),
            status: CheckStatus::Error,
            message: "Catalog contains no projects".to_string(),
            details: Vec::new(),
        }
    } else {
        ValidationCheck {
            name: "records".to_string(),
            status: CheckStatus::Pass,
            message: format!("{} projects loaded", records.len()),
            details: Vec::new(),
        }
    });

    let mut seen = HashSet::new();
    let duplicates: Vec<String> = records
        .iter()
        .filter(|r| !seen.insert(r.slug.as_str()))
        .map(|r| r.slug.clone())
        .collect();
    checks.push(ValidationCheck::from_offenders(
        "slug-unique",
        CheckStatus::Error,
        duplicates,
        "Slugs are unique",
        "Duplicate slugs",
    ));

    let unsafe_slugs: Vec<String> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| !is_url_safe_slug(&r.slug))
        .map(|(i, r)| format!("#{}: '{}'", i, r.slug))
        .collect();
    checks.push(ValidationCheck::from_offenders(
        "slug-format",
        CheckStatus::Error,
        unsafe_slugs,
        "Slugs are URL-safe",
        "Slugs must match [a-z0-9-]+",
    ));

    let empty_titles = offenders(records, |r| r.title.trim().is_empty());
    checks.push(ValidationCheck::from_offenders(
        "title",
        CheckStatus::Error,
        empty_titles,
        "Titles are present",
        "Empty titles",
    ));

    let odd_summaries = offenders(records, |r| {
        // UTF-16 code units, matching the site's JavaScript `.length`.
        let len = r.summary.encode_utf16().count();
        len <= SUMMARY_MIN_EXCLUSIVE || len >= SUMMARY_MAX_EXCLUSIVE
    });
    checks.push(ValidationCheck::from_offenders(
        "summary-length",
        CheckStatus::Warning,
        odd_summaries,
        "Summaries are a reasonable length",
        "Summaries outside 11-299 characters",
    ));

    let missing_covers = offenders(records, |r| r.cover().is_none());
    checks.push(ValidationCheck::from_offenders(
        "cover",
        CheckStatus::Warning,
        missing_covers,
        "Every project has a cover",
        "Projects without a cover",
    ));

    let bad_covers = offenders(records, |r| r.cover().is_some_and(|c| !is_http_url(c)));
    checks.push(ValidationCheck::from_offenders(
        "cover-url",
        CheckStatus::Error,
        bad_covers,
        "Cover URLs are valid",
        "Cover URLs must start with http:// or https://",
    ));

    let bad_links = offenders(records, |r| {
        r.links.as_ref().is_some_and(|links| {
            [links.demo.as_deref(), links.source.as_deref()]
                .into_iter()
                .flatten()
                .any(|url| !is_http_url(url))
        })
    });
    checks.push(ValidationCheck::from_offenders(
        "links",
        CheckStatus::Error,
        bad_links,
        "Project links are valid",
        "Demo/source links must start with http:// or https://",
    ));

    ValidationReport { checks }
}

fn offenders(records: &[ProjectRecord], bad: impl Fn(&ProjectRecord) -> bool) -> Vec<String> {
    records
        .iter()
        .filter(|&r| bad(r))
        .map(|r| r.slug.clone())
        .collect()
}

fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
