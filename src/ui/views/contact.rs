use folio::{ContactForm, Locale};
use folio::domain::entities::SubmitOutcome;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Status line for a finished submission. Suppressed submissions show nothing.
pub fn render_contact_outcome(
    outcome: SubmitOutcome,
    form: &ContactForm,
    locale: Locale,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    match outcome {
        SubmitOutcome::Suppressed => None,
        SubmitOutcome::Busy => Some(format!(
            "{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            form.button_label(locale)
        )),
        SubmitOutcome::Sent => form
            .status_message(locale)
            .map(|msg| format!("{}\n", ColoredText::success(msg).render(supports_color))),
        SubmitOutcome::Failed(_) => form
            .status_message(locale)
            .map(|msg| format!("{}\n", ColoredText::error(msg).render(supports_color))),
    }
}

/// Shown on stderr while the request is in flight.
pub fn render_sending(form: &ContactForm, locale: Locale, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}",
        Icon::Contact.colored(supports_color, supports_unicode),
        ColoredText::dim(form.button_label(locale)).render(supports_color)
    )
}
