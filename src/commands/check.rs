//! Check command: CI persona-file check.

use std::path::PathBuf;

use anyhow::Result;

use folio::presentation::factory;

use super::Invocation;
use crate::ui::events::EventStream;
use crate::ui::output::verbose;
use crate::ui::blocks::header::{render_header, HeaderSubject};
use crate::ui::views::persona::{render_persona_report, render_persona_summary};

pub fn cmd_check(inv: &Invocation, root: Option<PathBuf>) -> Result<bool> {
    let root = match root {
        Some(root) => inv.project_root.join(root),
        None => inv.config.persona_root(&inv.project_root),
    };
    verbose(&inv.ui, format!("persona root: {}", root.display()));

    let report = factory::create_persona_check_use_case().run(&root);
    let success = report.is_success();

    if inv.ui.json {
        EventStream::stdout("check").data(&report)?;
        return Ok(success);
    }

    if inv.chrome() {
        print!(
            "{}",
            render_header(
                &HeaderSubject::Persona {
                    root: inv.relative(&root),
                },
                inv.color(),
                inv.unicode()
            )
        );
        println!();
    }
    print!(
        "{}",
        render_persona_report(&report, inv.color(), inv.unicode())
    );
    if inv.chrome() {
        println!();
        print!(
            "{}",
            render_persona_summary(&report, inv.color(), inv.unicode())
        );
    }
    Ok(success)
}
