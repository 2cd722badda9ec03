use folio::domain::services::{CheckStatus, ValidationCheck};

use crate::ui::primitives::icon::Icon;

pub fn status_icon(status: CheckStatus) -> Icon {
    match status {
        CheckStatus::Pass => Icon::Success,
        CheckStatus::Warning => Icon::Warning,
        CheckStatus::Error => Icon::Error,
    }
}

/// One line per check, plus its details when verbose.
pub fn render_check(
    check: &ValidationCheck,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = status_icon(check.status).colored(supports_color, supports_unicode);

    let mut out = format!("  {} {} - {}\n", icon, check.name, check.message);

    // Failing checks always show what failed.
    if verbose || check.status != CheckStatus::Pass {
        for detail in &check.details {
            out.push_str(&format!(
                "    {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                detail
            ));
        }
    }

    out
}
