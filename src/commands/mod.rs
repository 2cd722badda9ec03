//! Command handlers
//!
//! Each handler returns `Ok(true)` on success, `Ok(false)` when the command
//! ran but its verdict is a failure (exit 1), and `Err` when it could not run.

mod browse;
mod catalog;
mod check;
mod contact;
mod theme;
mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;

use folio::config::Config;
use folio::presentation::factory;
use folio::presentation::{Cli, Commands};
use folio::Catalog;

use crate::ui::context::UiContext;
use crate::ui::events::EventStream;
use crate::ui::output::{print_config_warnings, verbose};

pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Tags => "tags",
        Commands::List { .. } => "list",
        Commands::Render { .. } => "render",
        Commands::Diff { .. } => "diff",
        Commands::Browse => "browse",
        Commands::Validate { .. } => "validate",
        Commands::Contact { .. } => "contact",
        Commands::Theme { .. } => "theme",
        Commands::Check { .. } => "check",
    }
}

pub fn run(cli: Cli) -> Result<bool> {
    let name = command_name(&cli.command);
    let inv = Invocation::from_cli(&cli, name)?;

    if inv.ui.json {
        EventStream::stdout(name).start()?;
    }

    let success = match cli.command {
        Commands::Tags => catalog::cmd_tags(&inv)?,
        Commands::List { tag } => catalog::cmd_list(&inv, tag)?,
        Commands::Render { tag, out } => catalog::cmd_render(&inv, tag, out.as_deref())?,
        Commands::Diff { from, to } => catalog::cmd_diff(&inv, &from, &to)?,
        Commands::Browse => browse::cmd_browse(&inv)?,
        Commands::Validate { strict_warnings } => validate::cmd_validate(&inv, strict_warnings)?,
        Commands::Contact {
            name,
            email,
            message,
            gotcha,
            endpoint,
            locale,
        } => contact::cmd_contact(
            &inv,
            contact::ContactArgs {
                name,
                email,
                message,
                gotcha,
                endpoint,
                locale: locale.map(Into::into),
            },
        )?,
        Commands::Theme { action } => theme::cmd_theme(&inv, action)?,
        Commands::Check { root } => check::cmd_check(&inv, root)?,
    };

    if inv.ui.json {
        EventStream::stdout(name).complete(success)?;
    }
    Ok(success)
}

/// Everything a handler needs: where it runs, the layered config and the UI.
pub struct Invocation {
    pub project_root: PathBuf,
    pub config: Config,
    pub ui: UiContext,
    catalog_override: Option<PathBuf>,
}

impl Invocation {
    fn from_cli(cli: &Cli, command: &str) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let loaded = Config::discover(&project_root, cli.config.as_deref())?;
        let ui = UiContext::new(cli.json, cli.verbose, cli.color, &loaded.config);

        print_config_warnings(&ui, command, &loaded.warnings);
        match &loaded.source {
            Some(path) => verbose(&ui, format!("config: {}", path.display())),
            None => verbose(&ui, "config: built-in defaults"),
        }

        Ok(Self {
            project_root,
            config: loaded.config,
            ui,
            catalog_override: cli.catalog.clone(),
        })
    }

    /// `--catalog` wins over `FOLIO_CATALOG` and `[catalog] path`.
    pub fn catalog_path(&self) -> PathBuf {
        match &self.catalog_override {
            Some(path) => self.project_root.join(path),
            None => self.config.catalog_path(&self.project_root),
        }
    }

    pub fn load_catalog(&self) -> Result<(PathBuf, Catalog)> {
        let path = self.catalog_path();
        let catalog = factory::load_catalog(&path)?;
        verbose(
            &self.ui,
            format!(
                "catalog: {} ({} projects, {} tags)",
                path.display(),
                catalog.len(),
                catalog.tags().len()
            ),
        );
        Ok((path, catalog))
    }

    pub fn color(&self) -> bool {
        self.ui.color
    }

    pub fn unicode(&self) -> bool {
        self.ui.unicode
    }

    /// Headers and summaries are skipped in quiet mode.
    pub fn chrome(&self) -> bool {
        !self.ui.quiet
    }

    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.project_root).unwrap_or(path)
    }
}
