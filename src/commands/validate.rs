//! Validate command: catalog data-quality report.

use anyhow::Result;
use serde::Serialize;

use folio::domain::services::{validate_catalog, ValidationReport};

use super::Invocation;
use crate::ui::blocks::header::{render_header, HeaderSubject};
use crate::ui::events::EventStream;
use crate::ui::views::validate::{render_validation_report, render_validation_summary};

pub fn cmd_validate(inv: &Invocation, strict_warnings: bool) -> Result<bool> {
    let (path, catalog) = inv.load_catalog()?;
    let report = validate_catalog(catalog.records());
    let success = passed(&report, strict_warnings);

    if inv.ui.json {
        #[derive(Serialize)]
        struct Report<'a> {
            #[serde(flatten)]
            report: &'a ValidationReport,
            passes: usize,
            warnings: usize,
            errors: usize,
            success: bool,
        }
        EventStream::stdout("validate").data(&Report {
            report: &report,
            passes: report.passes(),
            warnings: report.warnings(),
            errors: report.errors(),
            success,
        })?;
        return Ok(success);
    }

    if inv.chrome() {
        print!(
            "{}",
            render_header(
                &HeaderSubject::Validation {
                    source: inv.relative(&path),
                    strict: strict_warnings,
                },
                inv.color(),
                inv.unicode()
            )
        );
        println!();
    }
    print!(
        "{}",
        render_validation_report(&report, inv.ui.is_verbose(), inv.color(), inv.unicode())
    );
    if inv.chrome() {
        println!();
        print!(
            "{}",
            render_validation_summary(&report, strict_warnings, inv.color(), inv.unicode())
        );
    }
    Ok(success)
}

fn passed(report: &ValidationReport, strict_warnings: bool) -> bool {
    report.is_success() && !(strict_warnings && report.warnings() > 0)
}
