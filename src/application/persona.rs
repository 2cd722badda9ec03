//! Persona Check Use Case
//!
//! Looks for the instruction files under `<root>/instructions/` and checks
//! that `<root>/copilot-instructions.md` names each of them.

use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::domain::services::PersonaReport;

pub const INSTRUCTIONS_DIR: &str = "instructions";
pub const INDEX_FILE: &str = "copilot-instructions.md";

pub struct PersonaCheckUseCase<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> PersonaCheckUseCase<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn run(&self, root: &Path) -> PersonaReport {
        let instructions = root.join(INSTRUCTIONS_DIR);
        let index_path = root.join(INDEX_FILE);

        // An unreadable index counts as missing.
        let index = if self.fs.exists(&index_path) {
            self.fs.read(&index_path).ok()
        } else {
            None
        };

        PersonaReport::evaluate(
            |file| self.fs.exists(&instructions.join(file)),
            index.as_deref(),
        )
    }
}
