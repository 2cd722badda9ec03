//! Folio CLI - portfolio catalog toolkit
//!
//! Usage: folio <COMMAND>
//!
//! Commands:
//!   tags      List the tag index
//!   list      List the projects visible for a tag
//!   render    Render the filter bar and card grid as HTML
//!   diff      Show entering / leaving / persisting cards between two tags
//!   browse    Interactive tag filter
//!   validate  Check catalog data quality
//!   contact   Submit the contact form
//!   theme     Show or change the theme preference
//!   check     Verify persona instruction files (CI)

use std::process::ExitCode;

use clap::Parser;

use folio::presentation::Cli;

mod commands;
mod ui;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;
    let command = commands::command_name(&cli.command);

    match commands::run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            ui::error::print_error(&err, command, json);
            ExitCode::FAILURE
        }
    }
}
