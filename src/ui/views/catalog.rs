use unicode_width::UnicodeWidthStr;

use folio::domain::entities::ProjectRecord;
use folio::domain::services::ViewPhase;
use folio::Selection;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

/// Tag index, `All` first. The selected tag (if any) is marked.
pub fn render_tags(
    tags: &[String],
    selection: Option<&Selection>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for tag in tags {
        let marker = match selection {
            Some(sel) if sel.as_str() == tag => selected_icon(supports_unicode),
            Some(_) => unselected_icon(supports_unicode),
            None => Icon::Tag.render(supports_unicode),
        };
        let name = match selection {
            Some(sel) if sel.as_str() == tag => ColoredText::info(tag.as_str())
                .bold()
                .render(supports_color),
            _ => tag.clone(),
        };
        out.push_str(&format!("  {} {}\n", marker, name));
    }
    out
}

/// One line per visible record: slug, title and tags, then the summary
/// clipped to the terminal width.
pub fn render_project_list(
    records: &[&ProjectRecord],
    width: u16,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if records.is_empty() {
        return format!(
            "  {} no projects match this filter\n",
            Icon::Warning.colored(supports_color, supports_unicode)
        );
    }

    let slug_width = records.iter().map(|r| r.slug.width()).max().unwrap_or(0);
    let mut out = String::new();
    for record in records {
        let pad = " ".repeat(slug_width - record.slug.width());
        let tags = if record.tags.is_empty() {
            String::new()
        } else {
            format!(
                "  {}",
                ColoredText::dim(format!("[{}]", record.tags.join(", "))).render(supports_color)
            )
        };
        out.push_str(&format!(
            "  {}{}  {}{}\n",
            ColoredText::info(record.slug.as_str()).render(supports_color),
            pad,
            ColoredText::plain(record.title.as_str())
                .bold()
                .render(supports_color),
            tags
        ));

        if !record.summary.is_empty() {
            let indent = slug_width + 4;
            let room = usize::from(width).saturating_sub(indent).max(20);
            out.push_str(&format!(
                "{}{}\n",
                " ".repeat(indent),
                ColoredText::dim(clip(&record.summary, room)).render(supports_color)
            ));
        }
    }
    out
}

/// Grid cards with their phase marker: `+` entering, `=` present.
pub fn render_phased_cards(
    cards: &[(&ProjectRecord, ViewPhase)],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for (record, phase) in cards {
        let icon = match phase {
            ViewPhase::Entering => Icon::Entering,
            ViewPhase::Leaving | ViewPhase::Absent => Icon::Leaving,
            ViewPhase::Present => Icon::Persisting,
        };
        out.push_str(&format!(
            "  {} {}  {}\n",
            icon.colored(supports_color, supports_unicode),
            ColoredText::info(record.slug.as_str()).render(supports_color),
            record.title
        ));
    }
    out
}

fn selected_icon(supports_unicode: bool) -> &'static str {
    if supports_unicode {
        theme::icons::SELECTED
    } else {
        theme::icons_ascii::SELECTED
    }
}

fn unselected_icon(supports_unicode: bool) -> &'static str {
    if supports_unicode {
        theme::icons::UNSELECTED
    } else {
        theme::icons_ascii::UNSELECTED
    }
}

/// Cut `text` to at most `max` display columns, ending in `...` when cut.
fn clip(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let budget = max.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slug: &str, tags: &[&str]) -> ProjectRecord {
        ProjectRecord::new(slug, slug.to_uppercase())
            .with_summary("A reasonably long project summary")
            .with_tags(tags.iter().copied())
    }

    #[test]
    fn tags_mark_current_selection() {
        let tags = vec!["All".to_string(), "Rust".to_string()];
        let sel = Selection::from_tag("Rust");
        let out = render_tags(&tags, Some(&sel), false, false);
        assert_eq!(out, "  [ ] All\n  [x] Rust\n");
    }

    #[test]
    fn tags_without_selection_use_tag_icon() {
        let tags = vec!["All".to_string()];
        assert_eq!(render_tags(&tags, None, false, false), "  [TAGS] All\n");
    }

    #[test]
    fn list_aligns_titles_and_shows_tags() {
        let a = record("a", &["Rust"]);
        let long = record("long-slug", &[]);
        let out = render_project_list(&[&a, &long], 80, false, true);

        assert!(out.contains("  a          A  [Rust]\n"));
        assert!(out.contains("  long-slug  LONG-SLUG\n"));
    }

    #[test]
    fn empty_list_says_so() {
        let out = render_project_list(&[], 80, false, false);
        assert!(out.contains("no projects match"));
    }

    #[test]
    fn phased_cards_use_phase_markers() {
        let a = record("a", &[]);
        let c = record("c", &[]);
        let out = render_phased_cards(
            &[(&a, ViewPhase::Present), (&c, ViewPhase::Entering)],
            false,
            true,
        );
        assert_eq!(out, "  = a  A\n  + c  C\n");
    }

    #[test]
    fn clip_respects_width() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("abcdefghijkl", 8), "abcde...");
    }
}
