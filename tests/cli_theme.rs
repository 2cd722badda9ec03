//! `folio theme`

mod common;

use common::*;

#[test]
fn show_falls_back_to_system_preference() {
    let env = TestEnv::new();
    let output = env.run(&["theme"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "[THEME] ☀️ Terang (light, system preference)\n"
    );
}

#[test]
fn system_preference_comes_from_environment() {
    let env = TestEnv::new();
    let output = env
        .command()
        .env("FOLIO_COLOR_SCHEME", "dark")
        .args(["--json", "theme", "show"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let data = data_event(&output);
    assert_eq!(data["theme"], "dark");
    assert_eq!(data["source"], "system");
}

#[test]
fn toggle_persists_and_flips() {
    let env = TestEnv::new();

    let first = env.run(&["theme", "toggle"]);
    assert!(first.status.success(), "stderr: {}", stderr(&first));
    assert_eq!(stdout(&first), "[OK] 🌙 Gelap (dark saved)\n");

    let settings = std::fs::read_to_string(env.settings_path()).unwrap();
    assert!(settings.contains(r#"theme = "dark""#));

    let shown = env.run(&["--json", "theme"]);
    let data = data_event(&shown);
    assert_eq!(data["theme"], "dark");
    assert_eq!(data["source"], "stored");

    let second = env.run(&["theme", "toggle"]);
    assert_eq!(stdout(&second), "[OK] ☀️ Terang (light saved)\n");
}

#[test]
fn set_overrides_system_preference() {
    let env = TestEnv::new();
    let set = env.run(&["theme", "set", "light"]);
    assert!(set.status.success());

    let output = env
        .command()
        .env("FOLIO_COLOR_SCHEME", "dark")
        .args(["--json", "theme"])
        .output()
        .unwrap();
    let data = data_event(&output);
    assert_eq!(data["theme"], "light");
    assert_eq!(data["source"], "stored");
}

#[test]
fn unrecognized_stored_value_means_light() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.settings_path().parent().unwrap()).unwrap();
    std::fs::write(env.settings_path(), "theme = \"sepia\"\n").unwrap();

    let output = env
        .command()
        .env("FOLIO_COLOR_SCHEME", "dark")
        .args(["--json", "theme"])
        .output()
        .unwrap();
    let data = data_event(&output);
    assert_eq!(data["theme"], "light");
    assert_eq!(data["source"], "stored");
}

#[test]
fn corrupted_settings_file_is_reported() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.settings_path().parent().unwrap()).unwrap();
    std::fs::write(env.settings_path(), "theme = [unclosed\n").unwrap();

    let output = env.run(&["--json", "theme"]);
    assert!(!output.status.success());
    let error = events(&output)
        .into_iter()
        .find(|e| e["event"] == "error")
        .unwrap();
    assert_eq!(error["code"], "SETTINGS_CORRUPTED");
}

#[test]
fn english_locale_changes_label() {
    let env = TestEnv::new();
    env.write("folio.toml", "[contact]\nlocale = \"en\"\n");

    let output = env.run(&["theme", "set", "dark"]);
    assert_eq!(stdout(&output), "[OK] 🌙 Dark (dark saved)\n");
}
