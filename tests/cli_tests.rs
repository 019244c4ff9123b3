//! CLI integration tests for the salute binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[allow(deprecated)]
fn salute_cmd() -> Command {
    let mut cmd = Command::cargo_bin("salute").expect("Failed to find salute binary");
    cmd.env_remove("RUST_LOG")
        .env_remove("SALUTE__LANGUAGE")
        .env_remove("SALUTE__FORMAL")
        .env_remove("SALUTE__LOGIN")
        .env_remove("SALUTE__SELECTOR");
    cmd
}

// ============================================================================
// Greetings
// ============================================================================

#[test]
fn test_informal_greeting_by_default() {
    salute_cmd()
        .args(["--last", "Doe", "--first", "Jane"])
        .assert()
        .success()
        .stdout("Hello Jane!\n");
}

#[test]
fn test_formal_greeting() {
    salute_cmd()
        .args(["--last", "Doe", "--first", "Jane", "--formal"])
        .assert()
        .success()
        .stdout("Greetings Jane Doe\n");
}

#[test]
fn test_spanish_with_login() {
    salute_cmd()
        .args(["-l", "Garcia", "-f", "Maria", "--lang", "es", "--formal", "--login"])
        .assert()
        .success()
        .stdout("Saludos Maria Garcia\nInició sesión: Maria Garcia\n");
}

#[test]
fn test_missing_names_use_placeholder() {
    salute_cmd().assert().success().stdout("Hello  !\n");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unsupported_language_exits_with_2() {
    salute_cmd()
        .args(["--first", "Jane", "--lang", "fr"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Language fr is not supported!"));
}

#[test]
fn test_empty_language_reports_undefined() {
    salute_cmd()
        .args(["--lang", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Language Undefined is not supported!"));
}

#[test]
fn test_blank_selector_is_rejected() {
    salute_cmd()
        .args(["--first", "Jane", "--selector", " "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing element selector"));
}

#[test]
fn test_missing_config_file() {
    salute_cmd()
        .args(["--config", "does/not/exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
}

#[test]
fn test_formal_conflicts_with_informal() {
    salute_cmd()
        .args(["--formal", "--informal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

// ============================================================================
// Element writes, JSON, config
// ============================================================================

#[test]
fn test_selector_prints_element() {
    salute_cmd()
        .args(["--last", "Doe", "--first", "Jane", "--selector", "#greeting"])
        .assert()
        .success()
        .stdout("Hello Jane!\n#greeting = Hello Jane!\n");
}

#[test]
fn test_json_output() {
    let output = salute_cmd()
        .args([
            "--last", "Doe", "--first", "Jane", "--formal", "--login", "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["last_name"], "Doe");
    assert_eq!(json["first_name"], "Jane");
    assert_eq!(json["language"], "en");
    assert_eq!(json["greet_text"], "Greetings Jane Doe");
    assert_eq!(json["login"], "Logged in: Jane Doe");
    assert!(json.get("elements").is_none());
}

#[test]
fn test_config_file_supplies_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "language = \"es\"\nformal = true").unwrap();

    salute_cmd()
        .args(["--last", "Garcia", "--first", "Maria", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("Saludos Maria Garcia\n");

    salute_cmd()
        .args(["--first", "Maria", "--lang", "en", "--informal", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("Hello Maria!\n");
}

#[test]
fn test_env_overrides_config_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "language = \"en\"").unwrap();

    salute_cmd()
        .env("SALUTE__LANGUAGE", "es")
        .args(["--first", "Maria", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("Hola Maria!\n");
}

#[test]
fn test_help_mentions_languages() {
    salute_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Language code (en, es)"));
}
