//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose, --config, --catalog) are
//! inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::{Locale, Theme};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleArg {
    Id,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Id => Locale::Id,
            LocaleArg::En => Locale::En,
        }
    }
}

/// Folio - portfolio catalog toolkit
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./folio.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog JSON file (overrides [catalog] path)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tag index ("All" first)
    Tags,

    /// List the projects visible for a tag
    List {
        /// Tag to filter by ("All" or omitted shows everything)
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Render the filter bar and card grid as HTML
    Render {
        /// Selected tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Show which cards enter, leave and persist between two selections
    Diff {
        /// Previous selection
        #[arg(long, default_value = "All")]
        from: String,

        /// Next selection
        #[arg(long)]
        to: String,
    },

    /// Interactively switch tags and watch the grid change
    Browse,

    /// Check catalog data quality
    Validate {
        /// Fail on warnings too (CI mode)
        #[arg(long)]
        strict_warnings: bool,
    },

    /// Submit the contact form
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,

        /// Hidden anti-spam field; any value aborts silently
        #[arg(long, default_value = "", hide = true)]
        gotcha: String,

        /// Form endpoint (overrides [contact] endpoint)
        #[arg(long)]
        endpoint: Option<String>,

        /// Message language
        #[arg(long, value_enum)]
        locale: Option<LocaleArg>,
    },

    /// Show or change the theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Verify persona instruction files (CI)
    Check {
        /// Instructions root (defaults to [persona] root, ".github")
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ThemeAction {
    /// Print the resolved theme
    Show,
    /// Flip and persist the theme
    Toggle,
    /// Persist an explicit theme
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}
