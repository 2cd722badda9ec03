//! Catalog fixtures.

/// Three projects: a[React], b[Vue], c[React, Python].
pub const SCENARIO_CATALOG: &str = r#"[
  {
    "slug": "a",
    "title": "Alpha Dashboard",
    "summary": "Realtime metrics dashboard for small teams.",
    "tags": ["React"],
    "cover": "https://example.com/a.png",
    "links": { "demo": "https://a.example.com" }
  },
  {
    "slug": "b",
    "title": "Beta Store",
    "summary": "Storefront with a headless checkout flow.",
    "tags": ["Vue"],
    "cover": "https://example.com/b.png"
  },
  {
    "slug": "c",
    "title": "Gamma Pipeline",
    "summary": "Data pipeline with a React control panel.",
    "tags": ["React", "Python"],
    "cover": "https://example.com/c.png",
    "alt": "Pipeline screenshot"
  }
]
"#;

/// Passes every error check but warns: no cover, short summary.
pub const WARNING_CATALOG: &str = r#"[
  { "slug": "tiny", "title": "Tiny", "summary": "Too short", "tags": null }
]
"#;

/// Duplicate slug and a non-URL-safe slug.
pub const BROKEN_CATALOG: &str = r#"[
  { "slug": "same", "title": "One", "summary": "First of the duplicates.", "cover": "https://example.com/1.png" },
  { "slug": "same", "title": "Two", "summary": "Second of the duplicates.", "cover": "https://example.com/2.png" },
  { "slug": "Not Safe", "title": "Three", "summary": "Slug with spaces in it.", "cover": "https://example.com/3.png" }
]
"#;

pub const PERSONA_FILES: [&str; 6] = [
    "persona-modes.md",
    "persona-guardrails.md",
    "persona-evals.md",
    "tooling-matrix.md",
    "persona-instrumentation.md",
    "persona-fewshots.md",
];
