use folio::domain::services::{PersonaReport, PERSONA_FILES};

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

/// One line per instruction file: present and referenced, or what is wrong.
pub fn render_persona_report(
    report: &PersonaReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    if !report.index_found {
        out.push_str(&format!(
            "  {} copilot-instructions.md - index not found\n",
            Icon::Error.colored(supports_color, supports_unicode)
        ));
    }

    for file in PERSONA_FILES {
        let missing = report.missing.iter().any(|m| m == file);
        let unreferenced = report.unreferenced.iter().any(|u| u == file);
        let (icon, note) = match (missing, unreferenced) {
            (false, false) => (Icon::Success, "ok"),
            (true, false) => (Icon::Error, "missing"),
            (false, true) => (Icon::Error, "not referenced by index"),
            (true, true) => (Icon::Error, "missing and not referenced"),
        };
        out.push_str(&format!(
            "  {} {} - {}\n",
            icon.colored(supports_color, supports_unicode),
            file,
            note
        ));
    }

    out
}

pub fn render_persona_summary(
    report: &PersonaReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if report.is_success() {
        ResultSummary::success("Persona files complete")
    } else {
        ResultSummary::failure("Persona check FAILED")
    };
    summary.add_stat("missing", report.missing.len());
    summary.add_stat("unreferenced", report.unreferenced.len());
    summary.render(supports_color, supports_unicode)
}
