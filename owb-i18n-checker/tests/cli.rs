use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const COMMON: &str = r#"{"direct": {"Sword": {"name_fr": "Épée"}}, "regex": {}}"#;

fn setup(root: &Path) {
    fs::create_dir_all(root.join("armies")).unwrap();
    fs::create_dir_all(root.join("translation")).unwrap();
    fs::write(root.join("translation/common.json"), COMMON).unwrap();
    fs::write(
        root.join("armies/empire-of-man.json"),
        r#"{"name_en": "Sword", "options": [{"name_en": "Halberd"}]}"#,
    )
    .unwrap();
}

fn checker() -> Command {
    let mut cmd = Command::cargo_bin("translation-checker").expect("binary exists");
    cmd.env_remove("OWB_COMMON_DICTIONARY").env_remove("RUST_LOG");
    cmd
}

#[test]
fn translates_directory_and_writes_dump() {
    let tmp = tempdir().expect("temp dir");
    setup(tmp.path());

    checker()
        .arg("-j")
        .arg(tmp.path().join("armies"))
        .arg("-l")
        .arg("fr")
        .arg("-c")
        .arg(tmp.path().join("translation/common.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Check: empire-of-man.json"));

    let army: Value = serde_json::from_str(
        &fs::read_to_string(tmp.path().join("armies/empire-of-man.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(army["name_fr"], "Épée");
    assert_eq!(army["options"][0]["name_fr"], "Halberd");

    let dump = fs::read_to_string(tmp.path().join("translation/empire-of-man-dump.json")).unwrap();
    assert!(dump.contains("\"Halberd\""), "unexpected dump: {dump}");
}

#[test]
fn dry_run_keeps_army_file() {
    let tmp = tempdir().expect("temp dir");
    setup(tmp.path());
    let army_path = tmp.path().join("armies/empire-of-man.json");
    let before = fs::read_to_string(&army_path).unwrap();

    checker()
        .arg("--json-directory-path")
        .arg(tmp.path().join("armies"))
        .arg("--language")
        .arg("fr")
        .arg("--dry-run")
        .env("OWB_COMMON_DICTIONARY", tmp.path().join("translation/common.json"))
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&army_path).unwrap(), before);
    assert!(tmp.path().join("translation/empire-of-man-dump.json").is_file());
}

#[test]
fn debug_flag_traces_decisions() {
    let tmp = tempdir().expect("temp dir");
    setup(tmp.path());

    checker()
        .arg("-j")
        .arg(tmp.path().join("armies"))
        .arg("-l")
        .arg("fr")
        .arg("-c")
        .arg(tmp.path().join("translation/common.json"))
        .arg("-d")
        .assert()
        .success()
        .stdout(predicate::str::contains("DIRECT: 'Sword'->'Épée'"))
        .stdout(predicate::str::contains("NOT TRANSLATED: 'Halberd'"));
}

#[test]
fn rust_log_enables_debug_without_flag() {
    let tmp = tempdir().expect("temp dir");
    setup(tmp.path());

    checker()
        .arg("-j")
        .arg(tmp.path().join("armies"))
        .arg("-l")
        .arg("fr")
        .arg("-c")
        .arg(tmp.path().join("translation/common.json"))
        .arg("-r")
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("DIRECT: 'Sword'->'Épée'"));
}

#[test]
fn default_level_hides_debug_lines() {
    let tmp = tempdir().expect("temp dir");
    setup(tmp.path());

    checker()
        .arg("-j")
        .arg(tmp.path().join("armies"))
        .arg("-l")
        .arg("fr")
        .arg("-c")
        .arg(tmp.path().join("translation/common.json"))
        .arg("-r")
        .assert()
        .success()
        .stdout(predicate::str::contains("Check: empire-of-man.json"))
        .stdout(predicate::str::contains("DIRECT:").not());
}

#[test]
fn missing_language_is_rejected() {
    let tmp = tempdir().expect("temp dir");

    checker()
        .arg("-j")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--language"));
}

#[test]
fn malformed_dictionary_aborts() {
    let tmp = tempdir().expect("temp dir");
    setup(tmp.path());
    fs::write(tmp.path().join("translation/common.json"), "{").unwrap();

    checker()
        .arg("-j")
        .arg(tmp.path().join("armies"))
        .arg("-l")
        .arg("fr")
        .arg("-c")
        .arg(tmp.path().join("translation/common.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse JSON"));
}
