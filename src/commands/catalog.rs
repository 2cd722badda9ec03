//! Read-only catalog commands: tags, list, render, diff.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use folio::domain::ports::FileSystem;
use folio::infrastructure::LocalFs;
use folio::{FolioError, PageRenderer, ProjectRecord, Reconciliation, Selection};

use super::Invocation;
use crate::ui::blocks::header::{render_header, HeaderSubject};
use crate::ui::events::EventStream;
use crate::ui::output::{debug, verbose};
use crate::ui::views::catalog::{render_project_list, render_tags};
use crate::ui::views::diff::render_reconciliation;

pub fn cmd_tags(inv: &Invocation) -> Result<bool> {
    let (path, catalog) = inv.load_catalog()?;

    if inv.ui.json {
        #[derive(Serialize)]
        struct TagIndex<'a> {
            tags: &'a [String],
        }
        EventStream::stdout("tags").data(&TagIndex {
            tags: catalog.tags(),
        })?;
        return Ok(true);
    }

    if inv.chrome() {
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
    }
    print!(
        "{}",
        render_tags(catalog.tags(), None, inv.color(), inv.unicode())
    );
    Ok(true)
}

pub fn cmd_list(inv: &Invocation, tag: Option<String>) -> Result<bool> {
    let (path, catalog) = inv.load_catalog()?;
    let selection = Selection::from(tag);
    let visible = catalog.visible(&selection);

    if !selection.is_all() && !catalog.tags().iter().any(|t| t == selection.as_str()) {
        verbose(
            &inv.ui,
            format!("tag '{}' is not in the tag index", selection.as_str()),
        );
    }

    if inv.ui.json {
        #[derive(Serialize)]
        struct VisibleProjects<'a> {
            selection: &'a Selection,
            count: usize,
            projects: &'a [&'a ProjectRecord],
        }
        EventStream::stdout("list").data(&VisibleProjects {
            selection: &selection,
            count: visible.len(),
            projects: &visible,
        })?;
        return Ok(true);
    }

    if inv.chrome() {
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
        print!(
            "{}",
            render_tags(catalog.tags(), Some(&selection), inv.color(), inv.unicode())
        );
        println!();
    }
    print!(
        "{}",
        render_project_list(&visible, inv.ui.caps.width, inv.color(), inv.unicode())
    );
    Ok(true)
}

pub fn cmd_render(inv: &Invocation, tag: Option<String>, out: Option<&Path>) -> Result<bool> {
    let (_, catalog) = inv.load_catalog()?;

    let mut session = catalog.browse();
    let selection = Selection::from(tag);
    if !selection.is_all() {
        let update = session.select_tag(selection.as_str());
        debug(
            &inv.ui,
            format!("render: {} visible for '{}'", update.visible.len(), selection.as_str()),
        );
    }

    let html = PageRenderer::new().page(&session);

    match out {
        Some(target) => {
            let target = inv.project_root.join(target);
            LocalFs::new()
                .write(&target, &html)
                .map_err(FolioError::from)?;
            if inv.ui.json {
                #[derive(Serialize)]
                struct Written {
                    path: String,
                    cards: usize,
                }
                EventStream::stdout("render").data(&Written {
                    path: target.display().to_string(),
                    cards: session.visible().len(),
                })?;
            } else {
                verbose(&inv.ui, format!("wrote {}", target.display()));
            }
        }
        None if inv.ui.json => {
            #[derive(Serialize)]
            struct Rendered<'a> {
                selection: &'a Selection,
                html: &'a str,
            }
            EventStream::stdout("render").data(&Rendered {
                selection: session.selection(),
                html: &html,
            })?;
        }
        None => print!("{}", html),
    }
    Ok(true)
}

pub fn cmd_diff(inv: &Invocation, from: &str, to: &str) -> Result<bool> {
    let (_, catalog) = inv.load_catalog()?;
    let from = Selection::from_tag(from);
    let to = Selection::from_tag(to);
    let changes = catalog.reconcile(&from, &to);

    if inv.ui.json {
        #[derive(Serialize)]
        struct Diff<'a> {
            from: &'a Selection,
            to: &'a Selection,
            #[serde(flatten)]
            changes: &'a Reconciliation,
        }
        EventStream::stdout("diff").data(&Diff {
            from: &from,
            to: &to,
            changes: &changes,
        })?;
        return Ok(true);
    }

    if inv.chrome() {
        print!(
            "{}",
            render_header(
                &HeaderSubject::Transition {
                    from: &from,
                    to: &to,
                },
                inv.color(),
                inv.unicode()
            )
        );
        println!();
    }
    print!(
        "{}",
        render_reconciliation(&changes, inv.color(), inv.unicode())
    );
    Ok(true)
}
