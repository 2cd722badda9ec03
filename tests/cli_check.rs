//! `folio check` (persona instruction files)

mod common;

use common::*;

#[test]
fn complete_persona_layout_passes() {
    let env = TestEnv::new();
    env.write_persona_files();

    let output = env.run(&["check"]);
    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert!(stdout(&output).contains("[OK] Persona files complete"));
}

#[test]
fn missing_file_fails_and_is_named() {
    let env = TestEnv::new();
    env.write_persona_files();
    std::fs::remove_file(env.path(".github/instructions/persona-evals.md")).unwrap();

    let output = env.run(&["check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("persona-evals.md - missing"));
}

#[test]
fn unreferenced_file_fails() {
    let env = TestEnv::new();
    env.write_persona_files();
    let index = env.read(".github/copilot-instructions.md");
    env.write(
        ".github/copilot-instructions.md",
        &index.replace("- instructions/tooling-matrix.md\n", ""),
    );

    let output = env.run(&["--json", "check"]);
    assert_eq!(output.status.code(), Some(1));
    let data = data_event(&output);
    assert_eq!(data["missing"], serde_json::json!([]));
    assert_eq!(data["unreferenced"], serde_json::json!(["tooling-matrix.md"]));
}

#[test]
fn missing_index_fails() {
    let env = TestEnv::new();
    env.write_persona_files();
    std::fs::remove_file(env.path(".github/copilot-instructions.md")).unwrap();

    let output = env.run(&["check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("index not found"));
}

#[test]
fn root_flag_points_elsewhere() {
    let env = TestEnv::new();
    let output = env.run(&["check", "--root", "docs"]);
    assert_eq!(output.status.code(), Some(1));

    let output = env.run(&["--json", "check", "--root", "docs"]);
    assert_eq!(data_event(&output)["index_found"], false);
}
