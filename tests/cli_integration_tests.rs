//! CLI Integration Tests
//!
//! Runs both binaries with assert_cmd.
//!
//! # Coverage Exclusion
//! These tests are skipped during coverage runs.

#![cfg(not(coverage))]
#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// ═══════════════════════════════════════════════════════════════════════════
// CREATE-TEST-EXCEL TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_create_default_path() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("public")).unwrap();

    let mut cmd = Command::cargo_bin("create-test-excel").unwrap();
    cmd.current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created test Excel file: public/line_chart_test.xlsx",
        ))
        .stdout(predicate::str::contains("Data Preview:"))
        .stdout(predicate::str::contains("2024-01-05"))
        .stdout(predicate::str::contains("2024-01-06").not())
        .stdout(predicate::str::contains("Column Types:"))
        .stdout(predicate::str::contains("int64"));

    assert!(temp_dir.path().join("public/line_chart_test.xlsx").exists());
}

#[test]
fn test_create_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("create-test-excel").unwrap();
    cmd.current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to save Excel file"));

    assert!(!temp_dir.path().join("public").exists());
}

#[test]
fn test_create_with_rows_and_seed() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("a.xlsx");
    let second = temp_dir.path().join("b.xlsx");

    for path in [&first, &second] {
        let mut cmd = Command::cargo_bin("create-test-excel").unwrap();
        cmd.arg(path)
            .args(["--rows", "3", "--seed", "9"])
            .assert()
            .success();
    }

    let first_out = Command::cargo_bin("inspect-excel")
        .unwrap()
        .arg(&first)
        .output()
        .unwrap();
    let second_out = Command::cargo_bin("inspect-excel")
        .unwrap()
        .arg(&second)
        .output()
        .unwrap();

    let first_text = String::from_utf8_lossy(&first_out.stdout);
    let second_text = String::from_utf8_lossy(&second_out.stdout);
    assert!(first_text.contains("3 rows"));
    let first_rows: Vec<&str> = first_text.lines().skip(3).collect();
    let second_rows: Vec<&str> = second_text.lines().skip(3).collect();
    assert_eq!(first_rows, second_rows);
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT-EXCEL TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_inspect_generated_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fixture.xlsx");

    Command::cargo_bin("create-test-excel")
        .unwrap()
        .arg(&path)
        .assert()
        .success();

    Command::cargo_bin("inspect-excel")
        .unwrap()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("File exists: true"))
        .stdout(predicate::str::contains("10 rows x 4 columns"))
        .stdout(predicate::str::contains(
            "[\"Date\", \"Value1\", \"Value2\", \"Category\"]",
        ))
        .stdout(predicate::str::contains("Columns with Chinese characters:"))
        .stdout(predicate::str::contains("Column 'Category' (dtype: object)"));
}

#[test]
fn test_inspect_basic_mode() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fixture.xlsx");

    Command::cargo_bin("create-test-excel")
        .unwrap()
        .arg(&path)
        .assert()
        .success();

    Command::cargo_bin("inspect-excel")
        .unwrap()
        .arg(&path)
        .arg("--basic")
        .assert()
        .success()
        .stdout(predicate::str::contains("Column names:"))
        .stdout(predicate::str::contains("Columns with Chinese characters:").not())
        .stdout(predicate::str::contains("Column type details:").not());
}

#[test]
fn test_inspect_missing_file_exits_zero() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("inspect-excel")
        .unwrap()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Inspecting Excel file: public/line_chart_test.xlsx",
        ))
        .stdout(predicate::str::contains("File exists: false"))
        .stdout(predicate::str::contains("Error reading Excel file:"));
}

#[test]
fn test_inspect_non_spreadsheet_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("readme.txt");
    fs::write(&path, "plain text").unwrap();

    Command::cargo_bin("inspect-excel")
        .unwrap()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("File size: 10 bytes"))
        .stdout(predicate::str::contains("Error reading Excel file:"))
        .stdout(predicate::str::contains("Column names:").not());
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("inspect-excel")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--basic"));

    Command::cargo_bin("create-test-excel")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--seed"));
}
