#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the summation-demo binary.

use std::process::{Command, Output, Stdio};

fn run_summation_demo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_summation-demo"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute summation-demo")
}

#[test]
fn test_cli_fixed_n() {
    let output = run_summation_demo(&["--n", "10"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "Sum of 1 to 10 (Iterative): 55",
            "Sum of 1 to 10 (Formula)  : 55",
            "Sum of 1 to 10 (Recursive): 55",
        ]
    );
}

#[test]
fn test_cli_random_n_variants_agree() {
    let output = run_summation_demo(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let sums: Vec<&str> = stdout
        .lines()
        .map(|line| line.rsplit(": ").next().unwrap())
        .collect();
    assert_eq!(sums.len(), 3);
    assert!(sums.iter().all(|s| *s == sums[0]));
}

#[test]
fn test_cli_invalid_n_reports_error() {
    for raw in ["0", "-5", "3.5", "ten"] {
        let output = run_summation_demo(&["--n", raw]);
        assert!(!output.status.success(), "{raw}");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("Error: n must be a positive integer"),
            "{raw}: {stderr}"
        );
        assert!(output.stdout.is_empty(), "{raw}");
    }
}

#[test]
fn test_cli_help_command() {
    let output = run_summation_demo(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--n"));
}
