use folio::domain::ports::{RecordSourceError, StoreError, TransportError};
use folio::FolioError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::events::EventStream;
use crate::ui::terminal::detect_capabilities;

/// Stable machine-readable code for `--json` error events.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    let Some(folio) = err.downcast_ref::<FolioError>() else {
        return "ERROR";
    };

    match folio {
        FolioError::InvalidConfig { .. } => "INVALID_CONFIG",
        FolioError::Catalog(RecordSourceError::NotFound { .. }) => "CATALOG_NOT_FOUND",
        FolioError::Catalog(RecordSourceError::Unreadable { .. }) => "CATALOG_UNREADABLE",
        FolioError::Catalog(RecordSourceError::Malformed { .. }) => "CATALOG_MALFORMED",
        FolioError::Settings(StoreError::Corrupted { .. }) => "SETTINGS_CORRUPTED",
        FolioError::Settings(_) => "SETTINGS",
        FolioError::Transport(TransportError::Rejected { .. }) => "SUBMISSION_REJECTED",
        FolioError::Transport(_) => "TRANSPORT",
        FolioError::Fs(_) | FolioError::Io(_) => "IO",
        FolioError::MissingEndpoint => "MISSING_ENDPOINT",
    }
}

pub fn error_block(err: &anyhow::Error) -> ErrorBlock {
    let block = ErrorBlock::from_message(&err.to_string());
    match err.downcast_ref::<FolioError>() {
        Some(FolioError::InvalidConfig { file, .. }) => block.with_file(file.clone()),
        Some(FolioError::Catalog(RecordSourceError::NotFound { path })) => block
            .with_file(path.clone())
            .with_fix("create the catalog file or point --catalog / [catalog] path at it"),
        _ => block,
    }
}

pub fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = error_block(err).render(supports_color, supports_unicode);
    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }
    out
}

pub fn print_error(err: &anyhow::Error, command: &str, json: bool) {
    if json {
        let block = error_block(err);
        // Best effort: the error is already the process outcome.
        let _ = EventStream::stdout(command).error(error_code(err), &err.to_string(), block.fix());
        return;
    }

    let caps = detect_capabilities();
    // stderr may be a terminal even when stdout is piped; color follows stdout.
    eprint!(
        "{}",
        format_error_with(err, caps.supports_color && !caps.is_ci, caps.supports_unicode)
    );
}
