//! Terminal UI for the folio binary
//!
//! Human output goes through the themed primitives and blocks; `--json`
//! switches every command to NDJSON events on stdout.

pub mod blocks;
pub mod context;
pub mod error;
pub mod events;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
