//! Persona file check
//!
//! The repository keeps a fixed set of assistant instruction files under
//! `<root>/instructions/`, and each must be referenced by name from the
//! instructions index (`<root>/copilot-instructions.md`).

use serde::Serialize;

/// Instruction files that must exist and be referenced.
pub const PERSONA_FILES: [&str; 6] = [
    "persona-modes.md",
    "persona-guardrails.md",
    "persona-evals.md",
    "tooling-matrix.md",
    "persona-instrumentation.md",
    "persona-fewshots.md",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonaReport {
    pub missing: Vec<String>,
    pub unreferenced: Vec<String>,
    pub index_found: bool,
}

impl PersonaReport {
    /// Evaluate the check given which files exist and the index content.
    ///
    /// A missing index references nothing.
    pub fn evaluate(exists: impl Fn(&str) -> bool, index: Option<&str>) -> Self {
        let missing = PERSONA_FILES
            .into_iter()
            .filter(|&f| !exists(f))
            .map(|f| f.to_string())
            .collect();

        let unreferenced = PERSONA_FILES
            .into_iter()
            .filter(|&f| !index.is_some_and(|text| text.contains(f)))
            .map(|f| f.to_string())
            .collect();

        Self {
            missing,
            unreferenced,
            index_found: index.is_some(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.index_found && self.missing.is_empty() && self.unreferenced.is_empty()
    }

    /// Process exit code for CI.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}
