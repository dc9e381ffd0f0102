//! End-to-end tests for the `slrp` binary

use assert_cmd::Command;
use predicates::prelude::*;

fn slrp() -> Command {
    Command::cargo_bin("slrp").unwrap()
}

#[test]
fn evaluates_by_default() {
    slrp()
        .arg("1 + 2 * 3")
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn prints_tokens() {
    slrp()
        .args(["--mode", "tokens", "1+2 + 3"])
        .assert()
        .success()
        .stdout("(\"1\", \"+\", \"2\", \"+\", \"3\")\n");
}

#[test]
fn prints_json() {
    slrp()
        .args(["--mode", "tokens", "--format", "json", "1+2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"+\""))
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn partial_reports_remainder() {
    slrp()
        .args(["--partial", "1 + 2 )"])
        .assert()
        .success()
        .stdout("(3,) \")\"\n");
}

#[test]
fn fails_without_match() {
    slrp()
        .arg("1 +")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No match"));
}

#[test]
fn rejects_missing_config_file() {
    slrp()
        .args(["--config", "does-not-exist.toml", "1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}
