//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn grabtune_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_grabtune"));
    // Keep the user's config file out of test runs.
    cmd.env("XDG_CONFIG_HOME", "/nonexistent");
    cmd.env("HOME", "/nonexistent");
    cmd.env_remove("GRABTUNE_TOOL");
    cmd
}

#[test]
fn help_output() {
    grabtune_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("--tool"))
        .stdout(predicate::str::contains("--audio-format"));
}

#[test]
fn version_output() {
    grabtune_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("grabtune"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn run_help_shows_file_argument() {
    grabtune_bin()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FILE"));
}

#[test]
fn missing_subcommand_is_usage_error() {
    let assert = grabtune_bin().assert().failure();
    let code = assert.get_output().status.code();
    assert_eq!(code, Some(2), "clap usage errors exit with code 2");
}

#[test]
fn run_with_missing_job_file_fails() {
    grabtune_bin()
        .args(["run", "/no/such/jobs.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn check_with_missing_directory_fails() {
    grabtune_bin()
        .args(["check", "/no/such/dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn clean_with_missing_directory_fails() {
    grabtune_bin()
        .args(["clean", "/no/such/dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory not found"));
}
