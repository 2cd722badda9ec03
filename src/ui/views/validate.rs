use folio::domain::services::ValidationReport;

use crate::ui::blocks::check_item::render_check;
use crate::ui::blocks::summary::ResultSummary;

pub fn render_validation_report(
    report: &ValidationReport,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    report
        .checks
        .iter()
        .map(|check| render_check(check, verbose, supports_color, supports_unicode))
        .collect()
}

pub fn render_validation_summary(
    report: &ValidationReport,
    strict_warnings: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let warnings = report.warnings();
    let errors = report.errors();
    let failed = errors > 0 || (strict_warnings && warnings > 0);

    let mut summary = if failed {
        ResultSummary::failure("Validation FAILED")
    } else if warnings > 0 {
        ResultSummary::partial("Catalog valid with warnings")
    } else {
        ResultSummary::success("Catalog valid")
    };

    summary.add_stat("passed", report.passes());
    summary.add_stat("warnings", warnings);
    summary.add_stat("errors", errors);

    if failed && errors == 0 {
        summary.with_next_step("fix the warnings or drop --strict-warnings");
    } else if failed {
        summary.with_next_step("fix the errors above and run `folio validate` again");
    }

    summary.render(supports_color, supports_unicode)
}
