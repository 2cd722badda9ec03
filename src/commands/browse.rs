//! Browse command: interactive tag filter over one session.

use anyhow::{bail, Result};
use dialoguer::Select;

use super::Invocation;
use crate::ui::blocks::header::{render_header, HeaderSubject};
use crate::ui::output::debug;
use crate::ui::terminal::stdin_is_interactive;
use crate::ui::theme::FolioTheme;
use crate::ui::views::catalog::render_phased_cards;
use crate::ui::views::diff::render_reconciliation;

const QUIT: &str = "Quit";

pub fn cmd_browse(inv: &Invocation) -> Result<bool> {
    if inv.ui.json || !stdin_is_interactive() {
        bail!(
            "browse needs an interactive terminal\n  → Fix: use `folio list --tag <TAG>` or `folio diff --to <TAG>` in scripts"
        );
    }

    let (path, catalog) = inv.load_catalog()?;
    let mut session = catalog.browse();
    let theme = FolioTheme::new(inv.unicode());

    print!(
        "{}",
        render_header(
            &HeaderSubject::Catalog {
                source: inv.relative(&path),
                projects: catalog.len(),
            },
            inv.color(),
            inv.unicode()
        )
    );
    println!();
    print!(
        "{}",
        render_phased_cards(&session.cards(), inv.color(), inv.unicode())
    );

    loop {
        let tags = catalog.tags();
        let mut items: Vec<String> = tags
            .iter()
            .map(|tag| {
                let marker = if session.is_active(tag) {
                    theme.selected_icon()
                } else {
                    theme.unselected_icon()
                };
                format!("{} {}", marker, tag)
            })
            .collect();
        items.push(QUIT.to_string());

        let current = tags
            .iter()
            .position(|tag| session.is_active(tag))
            .unwrap_or(0);

        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("Filter by tag")
            .items(&items)
            .default(current)
            .interact_opt()?;

        // Esc, q and the Quit entry all end the session.
        let Some(tag) = choice.and_then(|idx| tags.get(idx)) else {
            break;
        };

        let update = session.select_tag(tag);
        debug(
            &inv.ui,
            format!(
                "selection '{}': {} visible",
                update.selection.as_str(),
                update.visible.len()
            ),
        );

        println!();
        print!(
            "{}",
            render_reconciliation(&update.changes, inv.color(), inv.unicode())
        );
        println!();
        print!(
            "{}",
            render_phased_cards(&session.cards(), inv.color(), inv.unicode())
        );
    }

    Ok(true)
}
