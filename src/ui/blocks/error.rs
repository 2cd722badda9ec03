use std::path::PathBuf;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

const FIX_MARKER: &str = "→ Fix:";

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    file: Option<PathBuf>,
    message: String,
    details: Vec<String>,
    fix: Option<String>,
}

impl ErrorBlock {
    /// Build from an error message, lifting any `→ Fix:` hint out of the text.
    pub fn from_message(message: &str) -> Self {
        let mut lines = message.lines();
        let head = lines.next().unwrap_or_default().to_string();

        let mut details = Vec::new();
        let mut fix = None;
        for line in lines {
            let line = line.trim();
            if let Some(hint) = line.strip_prefix(FIX_MARKER) {
                fix = Some(hint.trim().to_string());
            } else if let Some(detail) = line.strip_prefix("→") {
                details.push(detail.trim().to_string());
            } else if !line.is_empty() {
                details.push(line.to_string());
            }
        }

        Self {
            file: None,
            message: head,
            details,
            fix,
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn fix(&self) -> Option<&str> {
        self.fix.as_deref()
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("ERROR").bold().render(supports_color)
        );
        let mut b = Box::with_title(title).style(BoxStyle::Error);

        if let Some(file) = &self.file {
            b.add_line(ColoredText::dim(file.display().to_string()).render(supports_color));
        }
        b.add_empty();
        b.add_line(self.message.clone());

        for detail in &self.details {
            b.add_line(format!(
                "{} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                detail
            ));
        }

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(format!("FIX: {}", fix));
        }

        b.render(supports_color, supports_unicode)
    }
}
