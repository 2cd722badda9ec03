//! Repository implementations

mod json_records;
mod settings;

pub use json_records::JsonRecordSource;
pub use settings::{default_settings_path, TomlKeyValueStore};
