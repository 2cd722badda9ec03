use folio::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::events::EventStream;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn format_config_warning(w: &ConfigWarning, supports_unicode: bool) -> String {
    let mut out = match w.line {
        Some(line) => format!(
            "{} Unknown config key '{}' in {}:{}",
            Icon::Warning.render(supports_unicode),
            w.key,
            w.file.display(),
            line
        ),
        None => format!(
            "{} Unknown config key '{}' in {}",
            Icon::Warning.render(supports_unicode),
            w.key,
            w.file.display()
        ),
    };
    if let Some(suggestion) = &w.suggestion {
        out.push_str(&format!("\n   Did you mean '{}'?", suggestion));
    }
    out
}

pub fn print_config_warnings(ui: &UiContext, command: &str, warnings: &[ConfigWarning]) {
    for w in warnings {
        if ui.json {
            let _ = EventStream::stdout(command).warning(&format_config_warning(w, false));
        } else if !ui.quiet {
            eprintln!("{}", format_config_warning(w, ui.unicode));
        }
    }
}

/// Diagnostic line on stderr, shown from `-v` upwards.
pub fn verbose(ui: &UiContext, message: impl AsRef<str>) {
    if ui.json || !ui.is_verbose() {
        return;
    }
    eprintln!("{}", ColoredText::dim(message.as_ref()).render(ui.color));
}

/// Diagnostic line on stderr, shown from `-vv` upwards.
pub fn debug(ui: &UiContext, message: impl AsRef<str>) {
    if ui.json || ui.verbose < 2 {
        return;
    }
    eprintln!(
        "{}",
        ColoredText::dim(format!("debug: {}", message.as_ref())).render(ui.color)
    );
}
