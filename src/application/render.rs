//! Page Renderer
//!
//! Static HTML for one `BrowseSession`: the tag filter bar followed by the
//! card grid. Grid items carry the record slug and its view phase so a
//! stylesheet can animate entering cards.

use crate::domain::services::CardRenderer;
use crate::domain::services::escape_html;

use super::catalog::BrowseSession;

const FILTER_BAR_CLASS: &str = "flex flex-wrap gap-2 mb-6";
const FILTER_BUTTON_CLASS: &str = "text-xs px-3 py-1 rounded-full border transition";
const FILTER_ACTIVE_CLASS: &str = "bg-accent text-white border-accent";
const FILTER_INACTIVE_CLASS: &str = "hover:border-accent border-black/10 dark:border-white/20";
const GRID_CLASS: &str = "grid gap-6 sm:grid-cols-2 lg:grid-cols-3";

#[derive(Debug, Clone, Copy, Default)]
pub struct PageRenderer {
    cards: CardRenderer,
}

impl PageRenderer {
    pub fn new() -> Self {
        Self {
            cards: CardRenderer::new(),
        }
    }

    /// One button per tag, `All` first. The selected one is pressed.
    pub fn filter_bar(&self, session: &BrowseSession<'_>) -> String {
        let mut lines = vec![format!(r#"<div class="{}">"#, FILTER_BAR_CLASS)];
        for tag in session.catalog().tags() {
            let active = session.is_active(tag);
            let state = if active {
                FILTER_ACTIVE_CLASS
            } else {
                FILTER_INACTIVE_CLASS
            };
            lines.push(format!(
                r#"  <button type="button" class="{} {}" aria-pressed="{}">{}</button>"#,
                FILTER_BUTTON_CLASS,
                state,
                active,
                escape_html(tag)
            ));
        }
        lines.push("</div>".to_string());
        lines.join("\n")
    }

    pub fn grid(&self, session: &BrowseSession<'_>) -> String {
        let mut lines = vec![format!(r#"<div class="{}">"#, GRID_CLASS)];
        for (record, phase) in session.cards() {
            lines.push(format!(
                r#"  <div data-slug="{}" data-phase="{}">"#,
                escape_html(&record.slug),
                phase.as_str()
            ));
            for line in self.cards.render(record).to_html().lines() {
                lines.push(format!("    {}", line));
            }
            lines.push("  </div>".to_string());
        }
        lines.push("</div>".to_string());
        lines.join("\n")
    }

    /// Filter bar and grid, newline-terminated.
    pub fn page(&self, session: &BrowseSession<'_>) -> String {
        format!("{}\n{}\n", self.filter_bar(session), self.grid(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Catalog;
    use crate::domain::entities::ProjectRecord;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            ProjectRecord::new("a", "Alpha").with_tags(["React"]),
            ProjectRecord::new("b", "Beta").with_tags(["Vue"]),
        ])
    }

    #[test]
    fn filter_bar_marks_selection() {
        let catalog = catalog();
        let mut session = catalog.browse();
        session.select_tag("Vue");
        let html = PageRenderer::new().filter_bar(&session);

        assert_eq!(html.matches("<button").count(), 3);
        assert!(html.contains(&format!(
            r#"class="{} {}" aria-pressed="true">Vue</button>"#,
            FILTER_BUTTON_CLASS, FILTER_ACTIVE_CLASS
        )));
        assert!(html.contains(r#"aria-pressed="false">All</button>"#));
    }

    #[test]
    fn grid_keeps_leaving_cards_for_exit_transition() {
        let catalog = catalog();
        let mut session = catalog.browse();
        session.select_tag("React");
        let html = PageRenderer::new().grid(&session);

        assert!(html.contains(r#"data-slug="a" data-phase="present""#));
        assert!(html.contains(r#"data-slug="b" data-phase="leaving""#));
    }

    #[test]
    fn grid_drops_cards_once_they_have_left() {
        let catalog = catalog();
        let mut session = catalog.browse();
        session.select_tag("React");
        session.select_tag("React");
        let html = PageRenderer::new().grid(&session);

        assert!(html.contains(r#"data-slug="a" data-phase="present""#));
        assert!(!html.contains(r#"data-slug="b""#));
    }

    #[test]
    fn fresh_grid_cards_are_entering() {
        let catalog = catalog();
        let html = PageRenderer::new().grid(&catalog.browse());
        assert_eq!(html.matches(r#"data-phase="entering""#).count(), 2);
    }

    #[test]
    fn empty_catalog_renders_only_all_button() {
        let catalog = Catalog::new(Vec::new());
        let page = PageRenderer::new().page(&catalog.browse());
        assert_eq!(page.matches("<button").count(), 1);
        assert!(!page.contains("data-slug"));
        assert!(page.ends_with("</div>\n"));
    }
}
