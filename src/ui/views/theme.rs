use folio::application::{ThemeResolution, ThemeSource};
use folio::{Locale, Theme};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_theme(
    resolution: &ThemeResolution,
    locale: Locale,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let source = match resolution.source {
        ThemeSource::Stored => "saved preference",
        ThemeSource::System => "system preference",
    };
    format!(
        "{} {} {}\n",
        Icon::Theme.colored(supports_color, supports_unicode),
        ColoredText::plain(resolution.theme.label(locale))
            .bold()
            .render(supports_color),
        ColoredText::dim(format!("({}, {})", resolution.theme.as_str(), source))
            .render(supports_color)
    )
}

pub fn render_theme_saved(
    theme: Theme,
    locale: Locale,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::plain(theme.label(locale))
            .bold()
            .render(supports_color),
        ColoredText::dim(format!("({} saved)", theme.as_str())).render(supports_color)
    )
}
