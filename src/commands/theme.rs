//! Theme command: show, toggle or set the stored preference.

use anyhow::Result;
use serde::Serialize;

use folio::application::{ThemeResolution, ThemeSource};
use folio::presentation::factory;
use folio::presentation::ThemeAction;
use folio::{FolioError, Theme};

use super::Invocation;
use crate::ui::events::EventStream;
use crate::ui::views::theme::{render_theme, render_theme_saved};

pub fn cmd_theme(inv: &Invocation, action: Option<ThemeAction>) -> Result<bool> {
    let service = factory::create_theme_service(&inv.config);
    let locale = inv.config.contact.locale;

    match action.unwrap_or(ThemeAction::Show) {
        ThemeAction::Show => {
            let resolution = service.resolve().map_err(FolioError::from)?;
            if inv.ui.json {
                emit_theme("show", &resolution)?;
            } else {
                print!(
                    "{}",
                    render_theme(&resolution, locale, inv.color(), inv.unicode())
                );
            }
        }
        ThemeAction::Toggle => {
            let theme = service.toggle().map_err(FolioError::from)?;
            report_saved(inv, "toggle", theme)?;
        }
        ThemeAction::Set { theme } => {
            let theme = Theme::from(theme);
            service.set(theme).map_err(FolioError::from)?;
            report_saved(inv, "set", theme)?;
        }
    }
    Ok(true)
}

fn report_saved(inv: &Invocation, action: &'static str, theme: Theme) -> Result<()> {
    if inv.ui.json {
        emit_theme(
            action,
            &ThemeResolution {
                theme,
                source: ThemeSource::Stored,
            },
        )?;
    } else {
        print!(
            "{}",
            render_theme_saved(theme, inv.config.contact.locale, inv.color(), inv.unicode())
        );
    }
    Ok(())
}

fn emit_theme(action: &'static str, resolution: &ThemeResolution) -> Result<()> {
    #[derive(Serialize)]
    struct ThemeState<'a> {
        action: &'static str,
        #[serde(flatten)]
        resolution: &'a ThemeResolution,
    }
    EventStream::stdout("theme").data(&ThemeState { action, resolution })?;
    Ok(())
}
