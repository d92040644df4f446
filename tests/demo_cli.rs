//! End-to-end runs of the `calculator` binary.

use std::process::{Command, Output};

const EXPECTED: &str = "=== Calculator Application ===\n\
                        Demo mode\n\
                        5 + 3 = 8.0\n\
                        10 - 4 = 6.0\n\
                        Calculator works!\n";

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_calculator"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn calculator binary")
}

#[test]
fn test_no_arguments() {
    let output = run(&[]);

    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
}

#[test]
fn test_arguments_are_ignored() {
    let plain = run(&[]);
    let extra = run(&["foo", "bar"]);

    assert!(extra.status.success());
    assert_eq!(extra.stdout, plain.stdout);
    assert_eq!(String::from_utf8_lossy(&extra.stdout), EXPECTED);
}

#[test]
fn test_logging_stays_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_calculator"))
        .env("RUST_LOG", "trace")
        .output()
        .expect("failed to spawn calculator binary");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_invalid_log_filter_does_not_stop_demo() {
    let output = Command::new(env!("CARGO_BIN_EXE_calculator"))
        .env("RUST_LOG", "calculator=notalevel")
        .output()
        .expect("failed to spawn calculator binary");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    assert!(String::from_utf8_lossy(&output.stderr).contains("RUST_LOG"));
}
