use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::{contains, is_empty};
use tempfile::TempDir;

fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write test file");
}

#[test]
fn valid_file_exits_zero_with_silent_stdout() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("input.json");
    write_file(&input, r#"{"name":"Ada","age":37}"#);

    cargo_bin_cmd!("jsoncheck")
        .arg(&input)
        .assert()
        .success()
        .stdout(is_empty());
}

#[test]
fn invalid_file_exits_one_with_silent_stdout() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("input.json");
    write_file(&input, "[1, 2,]");

    cargo_bin_cmd!("jsoncheck")
        .arg(&input)
        .assert()
        .code(1)
        .stdout(is_empty());
}

#[test]
fn reads_from_stdin_when_no_path_is_given() {
    cargo_bin_cmd!("jsoncheck")
        .write_stdin("  [true, null]  ")
        .assert()
        .success()
        .stdout(is_empty());

    cargo_bin_cmd!("jsoncheck")
        .write_stdin("truefalse")
        .assert()
        .code(1)
        .stdout(is_empty());
}

#[test]
fn unopenable_path_reports_error_and_exits_one() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("does-not-exist.json");

    cargo_bin_cmd!("jsoncheck")
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("can't open"));
}

#[test]
fn extra_arguments_are_a_usage_error() {
    cargo_bin_cmd!("jsoncheck")
        .args(["a.json", "b.json"])
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("Usage"));
}

#[test]
fn empty_input_is_not_valid_json() {
    cargo_bin_cmd!("jsoncheck")
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(is_empty());
}
