use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Entering,
    Leaving,
    Persisting,
    Catalog,
    Tag,
    Render,
    Diff,
    Check,
    Contact,
    Theme,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Entering) => theme::icons::ENTERING,
            (true, Icon::Leaving) => theme::icons::LEAVING,
            (true, Icon::Persisting) => theme::icons::PERSISTING,
            (true, Icon::Catalog) => theme::icons::CATALOG,
            (true, Icon::Tag) => theme::icons::TAG,
            (true, Icon::Render) => theme::icons::RENDER,
            (true, Icon::Diff) => theme::icons::DIFF,
            (true, Icon::Check) => theme::icons::CHECK,
            (true, Icon::Contact) => theme::icons::CONTACT,
            (true, Icon::Theme) => theme::icons::THEME,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Entering) => theme::icons_ascii::ENTERING,
            (false, Icon::Leaving) => theme::icons_ascii::LEAVING,
            (false, Icon::Persisting) => theme::icons_ascii::PERSISTING,
            (false, Icon::Catalog) => theme::icons_ascii::CATALOG,
            (false, Icon::Tag) => theme::icons_ascii::TAG,
            (false, Icon::Render) => theme::icons_ascii::RENDER,
            (false, Icon::Diff) => theme::icons_ascii::DIFF,
            (false, Icon::Check) => theme::icons_ascii::CHECK,
            (false, Icon::Contact) => theme::icons_ascii::CONTACT,
            (false, Icon::Theme) => theme::icons_ascii::THEME,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Entering => theme::colors::SUCCESS,
            Icon::Error | Icon::Leaving => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow | Icon::Persisting => theme::colors::DIM,
            Icon::Catalog
            | Icon::Tag
            | Icon::Render
            | Icon::Diff
            | Icon::Check
            | Icon::Contact
            | Icon::Theme => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
