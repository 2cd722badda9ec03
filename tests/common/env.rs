//! Isolated environment for driving the `folio` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::PERSONA_FILES;

const FOLIO_VARS: &[&str] = &[
    "FOLIO_CATALOG",
    "FOLIO_CONTACT_ENDPOINT",
    "FOLIO_LOCALE",
    "FOLIO_VERBOSITY",
    "FOLIO_COLOR_SCHEME",
    "COLORFGBG",
    "HTTP_PROXY",
    "HTTPS_PROXY",
    "ALL_PROXY",
    "http_proxy",
    "https_proxy",
    "all_proxy",
];

pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Project with `src/data/projects.json` holding `catalog`.
    pub fn with_catalog(catalog: &str) -> Self {
        let env = Self::new();
        env.write("src/data/projects.json", catalog);
        env
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.path(".state/settings.toml")
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }

    /// Complete persona layout under `.github/`.
    pub fn write_persona_files(&self) {
        let mut index = String::from("# Instructions\n");
        for file in PERSONA_FILES {
            self.write(&format!(".github/instructions/{}", file), "# notes\n");
            index.push_str(&format!("- instructions/{}\n", file));
        }
        self.write(".github/copilot-instructions.md", &index);
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_folio"));
        cmd.current_dir(self.root());
        for var in FOLIO_VARS {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd.env("TERM", "dumb");
        cmd.env("XDG_CONFIG_HOME", self.path(".xdg"));
        cmd.env("FOLIO_SETTINGS_PATH", self.settings_path());
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().unwrap()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parse NDJSON stdout into one value per line.
pub fn events(output: &Output) -> Vec<serde_json::Value> {
    stdout(output)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

/// The single `data` event of a `--json` run.
pub fn data_event(output: &Output) -> serde_json::Value {
    let mut data: Vec<_> = events(output)
        .into_iter()
        .filter(|e| e["event"] == "data")
        .collect();
    assert_eq!(data.len(), 1, "expected one data event, got {:?}", data);
    data.remove(0)
}
