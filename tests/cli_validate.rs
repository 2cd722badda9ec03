//! `folio validate`

mod common;

use common::*;

#[test]
fn valid_catalog_passes() {
    let env = TestEnv::with_catalog(SCENARIO_CATALOG);
    let output = env.run(&["validate"]);

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert!(stdout(&output).contains("[OK] Catalog valid"));
}

#[test]
fn warnings_pass_unless_strict() {
    let env = TestEnv::with_catalog(WARNING_CATALOG);

    let relaxed = env.run(&["validate"]);
    assert!(relaxed.status.success());
    assert!(stdout(&relaxed).contains("[WARN] summary-length"));

    let strict = env.run(&["validate", "--strict-warnings"]);
    assert_eq!(strict.status.code(), Some(1));
    assert!(stdout(&strict).contains("Validation FAILED"));
}

#[test]
fn duplicate_and_unsafe_slugs_fail() {
    let env = TestEnv::with_catalog(BROKEN_CATALOG);
    let output = env.run(&["validate"]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("[FAIL] slug-unique"));
    assert!(out.contains("[FAIL] slug-format"));
    assert!(out.contains("'Not Safe'"));
}

#[test]
fn validate_json_reports_counts() {
    let env = TestEnv::with_catalog(BROKEN_CATALOG);
    let output = env.run(&["--json", "validate"]);

    assert_eq!(output.status.code(), Some(1));
    let data = data_event(&output);
    assert_eq!(data["errors"], 2);
    assert_eq!(data["success"], false);
    assert!(data["checks"].as_array().unwrap().len() >= 7);

    let last = events(&output).pop().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["success"], false);
}

#[test]
fn empty_catalog_is_an_error() {
    let env = TestEnv::with_catalog("[]");
    let output = env.run(&["validate"]);
    assert_eq!(output.status.code(), Some(1));
}
