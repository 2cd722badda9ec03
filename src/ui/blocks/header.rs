//! One-line command header: icon, title, then what the command looks at.

use std::path::Path;

use folio::Selection;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// What a command header describes.
#[derive(Debug, Clone, Copy)]
pub enum HeaderSubject<'a> {
    Catalog { source: &'a Path, projects: usize },
    Transition { from: &'a Selection, to: &'a Selection },
    Validation { source: &'a Path, strict: bool },
    Persona { root: &'a Path },
}

impl HeaderSubject<'_> {
    fn icon(&self) -> Icon {
        match self {
            HeaderSubject::Catalog { .. } => Icon::Catalog,
            HeaderSubject::Transition { .. } => Icon::Diff,
            HeaderSubject::Validation { .. } | HeaderSubject::Persona { .. } => Icon::Check,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            HeaderSubject::Catalog { .. } => "Folio Catalog",
            HeaderSubject::Transition { .. } => "Folio Diff",
            HeaderSubject::Validation { .. } => "Folio Validate",
            HeaderSubject::Persona { .. } => "Persona Check",
        }
    }

    fn detail(&self, supports_unicode: bool) -> String {
        match self {
            HeaderSubject::Catalog { source, projects } => {
                let noun = if *projects == 1 { "project" } else { "projects" };
                format!("{} ({} {})", source.display(), projects, noun)
            }
            HeaderSubject::Transition { from, to } => {
                let arrow = if supports_unicode { "→" } else { "->" };
                format!("{} {} {}", from.as_str(), arrow, to.as_str())
            }
            HeaderSubject::Validation { source, strict } => {
                if *strict {
                    format!("{} (strict: warnings fail)", source.display())
                } else {
                    source.display().to_string()
                }
            }
            HeaderSubject::Persona { root } => root.display().to_string(),
        }
    }
}

pub fn render_header(
    subject: &HeaderSubject<'_>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {}  {}\n",
        subject.icon().colored(supports_color, supports_unicode),
        ColoredText::info(subject.title()).bold().render(supports_color),
        ColoredText::dim(subject.detail(supports_unicode)).render(supports_color)
    )
}
