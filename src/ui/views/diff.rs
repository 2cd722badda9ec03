use folio::Reconciliation;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Entering, leaving, then persisting slugs, each in visible order.
pub fn render_reconciliation(
    changes: &Reconciliation,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    for slug in &changes.entering {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Entering.colored(supports_color, supports_unicode),
            ColoredText::success(slug.as_str()).render(supports_color)
        ));
    }
    for slug in &changes.leaving {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Leaving.colored(supports_color, supports_unicode),
            ColoredText::error(slug.as_str()).render(supports_color)
        ));
    }
    for slug in &changes.persisting {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Persisting.colored(supports_color, supports_unicode),
            ColoredText::dim(slug.as_str()).render(supports_color)
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "{} entering, {} leaving, {} persisting\n",
        changes.entering.len(),
        changes.leaving.len(),
        changes.persisting.len()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_are_rendered_in_order() {
        let changes = Reconciliation {
            entering: vec![],
            leaving: vec!["b".to_string()],
            persisting: vec!["a".to_string(), "c".to_string()],
        };

        let out = render_reconciliation(&changes, false, true);
        assert_eq!(
            out,
            "  - b\n  = a\n  = c\n\n0 entering, 1 leaving, 2 persisting\n"
        );
    }
}
