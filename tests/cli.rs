//! End-to-end tests for the archgreet binary.
//!
//! The expected output depends on the architecture the test binary itself is
//! compiled for, selected with `cfg!(target_arch)` to match the constant
//! baked into the greeter.

use assert_cmd::Command;
use predicates::prelude::*;

/// Exact expected stdout for the architecture this test suite was built for.
fn expected_output() -> &'static str {
    if cfg!(target_arch = "aarch64") {
        "Hello from macOS on ARM64 (Apple Silicon)!\nRunning optimized code for Apple Silicon\n"
    } else if cfg!(target_arch = "x86_64") {
        "Hello from macOS on x86_64 (Intel)!\nRunning on Intel architecture\n"
    } else {
        "Hello from macOS on unknown architecture!\n"
    }
}

fn archgreet() -> Command {
    Command::cargo_bin("archgreet").expect("archgreet binary should be built")
}

#[test]
fn prints_greeting_for_build_architecture() {
    archgreet()
        .assert()
        .success()
        .stdout(expected_output())
        .stderr(predicate::str::is_empty());
}

#[test]
fn output_ends_with_trailing_newline() {
    archgreet()
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\n"));
}

#[test]
fn extra_arguments_do_not_change_behavior() {
    archgreet()
        .args(["--verbose", "-x", "positional", "--help", "--version"])
        .assert()
        .success()
        .stdout(expected_output());
}

#[test]
fn stdin_is_never_consumed() {
    archgreet()
        .write_stdin("this input must be ignored\n")
        .assert()
        .success()
        .stdout(expected_output());
}

#[test]
fn repeated_runs_produce_identical_output() {
    let first = archgreet().assert().success();
    let second = archgreet().assert().success();

    assert_eq!(
        first.get_output().stdout,
        second.get_output().stdout,
        "two consecutive runs should print identical bytes"
    );
}

#[test]
fn debug_logging_stays_on_stderr() {
    archgreet()
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(expected_output())
        .stderr(predicate::str::contains("Compiled for"));
}
