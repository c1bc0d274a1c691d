//! Integration tests running the actual crate binary inside a scratch working directory.

use std::path::Path;
use std::process::{Command, Output};

use checkout_users_csv::DEFAULT_OUTPUT_PATH;

fn run_binary(working_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_checkout-users-csv"))
        .current_dir(working_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute binary")
}

#[test]
fn writes_fixture_relative_to_working_directory() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let fixture = dir.path().join(DEFAULT_OUTPUT_PATH);
    assert!(!fixture.parent().unwrap().exists());

    let output = run_binary(dir.path());

    assert!(
        output.status.success(),
        "binary exited with non-zero status.\nstderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let content = std::fs::read_to_string(&fixture).expect("fixture was not written");
    assert!(content.starts_with("email,password\r\ntestuser1@example.com,password123\r\n"));
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1001);
    assert_eq!(lines[0], "email,password");
    assert_eq!(lines[1], "testuser1@example.com,password123");
    assert_eq!(lines[1000], "testuser1000@example.com,password123");

    let stdout = String::from_utf8(output.stdout).expect("binary output was not valid UTF-8");
    assert!(stdout.contains(DEFAULT_OUTPUT_PATH));
    assert!(stdout.contains("Total lines: 1001 (1 header + 1000 users)"));
    assert!(stdout.contains("testuser1@example.com to testuser1000@example.com"));
    assert!(stdout.contains("Password (all): password123"));
}

#[test]
fn rerun_overwrites_with_identical_content() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let fixture = dir.path().join(DEFAULT_OUTPUT_PATH);

    assert!(run_binary(dir.path()).status.success());
    let first = std::fs::read(&fixture).unwrap();
    assert!(run_binary(dir.path()).status.success());
    let second = std::fs::read(&fixture).unwrap();

    assert_eq!(first, second);
}

#[test]
fn blocked_directory_fails_without_summary() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let top_level = Path::new(DEFAULT_OUTPUT_PATH)
        .components()
        .next()
        .expect("output path has at least one component");
    std::fs::write(dir.path().join(top_level), "in the way").unwrap();

    let output = run_binary(dir.path());

    assert!(!output.status.success(), "binary should have failed");
    assert!(
        output.stdout.is_empty(),
        "no summary expected, got: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to create directory"));
}
