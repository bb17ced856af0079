use assert_cmd::Command;
use predicates::prelude::*;

const FIXTURE: &str = "tests/fixtures/families.md";

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("family_parser").unwrap();
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn convert_to_stdout() {
    let out = cmd().args(["convert", FIXTURE]).output().unwrap();
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[0]["family_name"], "Kapoor family");
    assert_eq!(json[0]["members"][1]["profession"], "Actor, director and producer");
}

#[test]
fn convert_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    cmd()
        .args(["--compact", "convert", FIXTURE, "-o"])
        .arg(&path)
        .assert()
        .success();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(!written.contains('\n'));
    assert!(written.contains("\"family_name\":\"Akhtar family\""));
}

#[test]
fn malformed_line_logged() {
    cmd()
        .args(["convert", FIXTURE])
        .assert()
        .success()
        .stderr(predicate::str::contains("could not parse member line"));
}

#[test]
fn missing_input_fails() {
    cmd()
        .args(["convert", "tests/fixtures/nope.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn batch_writes_one_file_per_input() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .args(["batch", FIXTURE, "--out-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 1 files"));
    assert!(dir.path().join("families.json").exists());
}

#[test]
fn summary_lists_professions() {
    cmd()
        .args(["summary", FIXTURE])
        .assert()
        .success()
        .stdout(predicate::str::contains("Families:    3"))
        .stdout(predicate::str::contains("Actress and politician"));
}

#[test]
fn search_by_profession() {
    cmd()
        .args(["search", FIXTURE, "--profession", "Poet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Harivansh Rai Bachchan"))
        .stdout(predicate::str::contains("1 of 1 members shown"));
}

#[test]
fn custom_catalog_flag() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    std::fs::write(&catalog, r#"{"professions":[],"relationships":[]}"#).unwrap();
    let out = cmd()
        .args(["convert", FIXTURE, "--catalog"])
        .arg(&catalog)
        .output()
        .unwrap();
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json[0]["members"][0]["profession"], "Actor and producer");
    assert_eq!(json[0]["members"][0]["connections"].as_array().unwrap().len(), 0);
}

#[test]
fn catalog_prints_builtin() {
    cmd()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Married to\""));
}
