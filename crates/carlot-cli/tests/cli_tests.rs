//! Binary tests for the `carlot` command.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// `carlot` run from `dir`, isolated from the caller's environment.
fn carlot(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("carlot").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("CARLOT__DATA__FILES")
        .env_remove("CARLOT__DATA__DIR")
        .env_remove("CARLOT__PATTERNS__MODEL")
        .env_remove("CARLOT__PATTERNS__COMPONENTS")
        .env_remove("CARLOT__PATTERNS__TYRE_MODEL")
        .env("NO_COLOR", "1");
    cmd
}

fn car(model: &str, components: &str) -> String {
    format!(
        r#"{{"model": "{model}", "price": 110, "mileage": 500,
            "engine": {{"type": "GASOLINE", "power": 100.0}},
            "carBody": {{"color": "RED", "type": "HATCHBACK", "components": [{components}]}},
            "wheel": {{"type": "SUMMER", "model": "CONTINENTAL", "size": 16}}}}"#
    )
}

#[test]
fn help_lists_commands() {
    carlot(&workspace_root())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn version_flag() {
    carlot(&workspace_root())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn demo_is_the_default_command() {
    carlot(&workspace_root())
        .assert()
        .success()
        .stdout(predicate::str::contains("All cars (3)"))
        .stdout(predicate::str::contains("Sorted by engine power, descending"))
        .stdout(predicate::str::contains("GASOLINE models\n  BMW"))
        .stdout(predicate::str::contains("min: 800, max: 2300"))
        .stdout(predicate::str::contains("WINTER tyres"))
        .stdout(predicate::str::contains("Cars with BLUETOOTH"));
}

#[test]
fn demo_json_is_one_document() {
    let output = carlot(&workspace_root())
        .args(["demo", "--output-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["cars"].as_array().unwrap().len(), 3);
    assert_eq!(doc["sortedByEnginePower"][0]["model"], "BMW");
    assert_eq!(doc["gasolineModels"], serde_json::json!(["BMW"]));
    assert_eq!(doc["mileageStatistics"]["attribute"], "mileage");
    assert_eq!(doc["tyreGroups"][0]["tyreType"], "WINTER");
}

#[test]
fn validate_reports_rejected_fields_and_exits_two() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("good.json"), car("SEAT", r#""ABS""#)).unwrap();
    fs::write(dir.path().join("bad.json"), car("seat", r#""abs""#)).unwrap();

    carlot(dir.path())
        .args(["validate", "good.json", "bad.json", "missing.json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("good.json: valid"))
        .stdout(predicate::str::contains("bad.json: rejected"))
        .stdout(predicate::str::contains("model: seat does not match pattern"))
        .stdout(predicate::str::contains("carBody: car body data not correct"))
        .stdout(predicate::str::contains("missing.json: unreadable"))
        .stderr(predicate::str::contains("1 record(s) rejected, 1 source(s) unreadable"));
}

#[test]
fn validate_clean_files_succeeds() {
    carlot(&workspace_root())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 car(s) loaded, 1 duplicate(s) skipped"));
}

#[test]
fn sort_descending_by_component_count() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("one.json"), car("FORD", r#""ABS""#)).unwrap();
    fs::write(
        dir.path().join("three.json"),
        car("OPEL", r#""ABS", "ESP", "BLUETOOTH""#),
    )
    .unwrap();

    carlot(dir.path())
        .args(["sort", "components", "--desc", "one.json", "three.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)OPEL.*FORD").unwrap());
}

#[test]
fn unknown_sort_attribute_is_a_user_error() {
    carlot(&workspace_root())
        .args(["sort", "colour"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("colour"));
}

#[test]
fn stats_over_nothing_prints_no_data() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.json"), car("fiat", "")).unwrap();

    carlot(dir.path())
        .args(["stats", "price", "bad.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no data"));
}

#[test]
fn stats_json() {
    let output = carlot(&workspace_root())
        .args(["stats", "engine-power", "--output-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["attribute"], "engine_power");
    assert_eq!(doc["max"], 250.0);
    assert_eq!(doc["min"], 150.0);
}

#[test]
fn config_file_sets_patterns_and_dir() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("records")).unwrap();
    fs::write(dir.path().join("records/a.json"), car("Polo", r#""ABS""#)).unwrap();
    fs::write(
        dir.path().join("carlot.toml"),
        "[data]\ndir = 'records'\n\n[patterns]\nmodel = '^[A-Za-z]+$'\n",
    )
    .unwrap();

    carlot(dir.path())
        .args(["--config", "carlot.toml", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.json: valid"));
}

#[test]
fn environment_overrides_patterns() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.json"), car("Polo", r#""ABS""#)).unwrap();

    carlot(dir.path())
        .env("CARLOT__PATTERNS__MODEL", "^[A-Za-z]+$")
        .args(["validate", "a.json"])
        .assert()
        .success();
}

#[test]
fn invalid_pattern_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.json"), car("POLO", "")).unwrap();

    carlot(dir.path())
        .env("CARLOT__PATTERNS__MODEL", "(")
        .args(["validate", "a.json"])
        .assert()
        .code(4);
}

#[test]
fn missing_config_file_is_a_configuration_error() {
    carlot(&workspace_root())
        .args(["--config", "does-not-exist.toml", "demo"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn completions_for_bash() {
    carlot(&workspace_root())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("carlot"));
}

#[test]
fn quiet_and_verbose_conflict() {
    carlot(&workspace_root())
        .args(["-q", "-v", "demo"])
        .assert()
        .code(2);
}

#[test]
fn sort_accepts_dashed_attribute() {
    carlot(&workspace_root())
        .args(["sort", "wheel-size"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted by wheel size, ascending"))
        .stdout(predicate::str::is_match(r"(?s)VOLVO.*AUDI.*BMW").unwrap());
}

#[test]
fn any_no_color_value_is_accepted() {
    for value in ["1", "yes", "0", ""] {
        carlot(&workspace_root())
            .env("NO_COLOR", value)
            .args(["stats", "price"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Statistics for price"));
    }
}
