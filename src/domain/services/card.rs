//! Card Renderer
//!
//! Stateless presentation of one project record. Missing optional fields
//! only drop the corresponding piece of the card; rendering never fails.

use serde::Serialize;

use crate::domain::entities::ProjectRecord;

use super::escaping::escape_html;

/// Intrinsic size of cover images (16:9).
pub const COVER_WIDTH: u32 = 1200;
pub const COVER_HEIGHT: u32 = 675;

const CARD_CLASS: &str = "group rounded-xl overflow-hidden border border-black/5 dark:border-white/10 bg-white dark:bg-[#151515] hover:shadow-card transition block";
const COVER_FRAME_CLASS: &str = "aspect-video bg-black/5 dark:bg-white/5 overflow-hidden";
const COVER_CLASS: &str = "w-full h-full object-cover group-hover:scale-[1.02] transition";
const TITLE_CLASS: &str = "font-semibold text-lg mb-1";
const SUMMARY_CLASS: &str = "text-sm text-black/70 dark:text-white/70 line-clamp-3";
const CHIP_LIST_CLASS: &str = "mt-3 flex flex-wrap gap-2";
const CHIP_CLASS: &str = "text-xs px-2 py-1 rounded bg-black/5 dark:bg-white/10";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardImage {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

/// Everything a card shows, independent of the output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub slug: String,
    pub href: String,
    pub title: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<CardImage>,
    pub tags: Vec<String>,
}

impl CardView {
    pub fn image_count(&self) -> usize {
        usize::from(self.image.is_some())
    }

    /// Render the card as an HTML fragment (no trailing newline).
    pub fn to_html(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!(
            r#"<a href="{}" class="{}">"#,
            escape_html(&self.href),
            CARD_CLASS
        ));

        if let Some(image) = &self.image {
            lines.push(format!(r#"  <div class="{}">"#, COVER_FRAME_CLASS));
            lines.push(format!(
                r#"    <img src="{}" alt="{}" class="{}" loading="lazy" width="{}" height="{}">"#,
                escape_html(&image.src),
                escape_html(&image.alt),
                COVER_CLASS,
                image.width,
                image.height
            ));
            lines.push("  </div>".to_string());
        }

        lines.push(r#"  <div class="p-4">"#.to_string());
        lines.push(format!(
            r#"    <h3 class="{}">{}</h3>"#,
            TITLE_CLASS,
            escape_html(&self.title)
        ));
        lines.push(format!(
            r#"    <p class="{}">{}</p>"#,
            SUMMARY_CLASS,
            escape_html(&self.summary)
        ));

        if !self.tags.is_empty() {
            lines.push(format!(r#"    <div class="{}">"#, CHIP_LIST_CLASS));
            for tag in &self.tags {
                lines.push(format!(
                    r#"      <span class="{}">{}</span>"#,
                    CHIP_CLASS,
                    escape_html(tag)
                ));
            }
            lines.push("    </div>".to_string());
        }

        lines.push("  </div>".to_string());
        lines.push("</a>".to_string());
        lines.join("\n")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CardRenderer;

impl CardRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, record: &ProjectRecord) -> CardView {
        let image = record.cover().map(|src| CardImage {
            src: src.to_string(),
            alt: record.alt_text().to_string(),
            width: COVER_WIDTH,
            height: COVER_HEIGHT,
        });

        CardView {
            slug: record.slug.clone(),
            href: record.detail_path(),
            title: record.title.clone(),
            summary: record.summary.clone(),
            image,
            tags: record.tags.clone(),
        }
    }
}
