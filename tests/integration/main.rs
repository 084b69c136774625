//! Integration tests for the receipt-points CLI
//!
//! These run the built binary against receipt files on disk and check the
//! exit status and printed output.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const TARGET_RECEIPT: &str = r#"{
    "retailer": "Target",
    "purchaseDate": "2022-01-01",
    "purchaseTime": "13:01",
    "items": [
        {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
        {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
        {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
        {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
        {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
    ],
    "total": "35.35"
}"#;

const INVALID_RECEIPT: &str = r#"{
    "retailer": "Target",
    "purchaseDate": "2022-01-01",
    "purchaseTime": "13:01",
    "items": [],
    "total": "35.35"
}"#;

/// Helper function to create a receipt-points command
fn receipt_points() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("receipt-points"))
}

/// Write `content` to a receipt file inside `dir`
fn write_receipt(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("receipt.json");
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version_flag() {
    receipt_points()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_command_json() {
    let output = receipt_points().args(["--json", "version"]).output().unwrap();
    assert!(output.status.success());

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_help_lists_commands() {
    receipt_points()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("score"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_no_command_prints_hint() {
    receipt_points()
        .assert()
        .success()
        .stdout(predicate::str::contains("receipt-points serve"));
}

// =============================================================================
// SCORE
// =============================================================================

#[test]
fn test_score_human() {
    let dir = TempDir::new().unwrap();
    let path = write_receipt(&dir, TARGET_RECEIPT);

    receipt_points()
        .arg("score")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Target"))
        .stdout(predicate::str::contains("28"));
}

#[test]
fn test_score_json_with_breakdown() {
    let dir = TempDir::new().unwrap();
    let path = write_receipt(&dir, TARGET_RECEIPT);

    let output = receipt_points()
        .args(["--json", "score", "--breakdown"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["retailer"], "Target");
    assert_eq!(body["points"], 28);
    assert_eq!(body["rules"].as_array().unwrap().len(), 7);
}

#[test]
fn test_score_from_stdin() {
    let output = receipt_points()
        .args(["--json", "score", "-"])
        .write_stdin(TARGET_RECEIPT)
        .output()
        .unwrap();
    assert!(output.status.success());

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["points"], 28);
    assert!(body.get("rules").is_none());
}

#[test]
fn test_score_invalid_receipt_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_receipt(&dir, INVALID_RECEIPT);

    receipt_points()
        .arg("score")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("there must be at least one item in receipt"));
}

#[test]
fn test_score_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    receipt_points()
        .arg("score")
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read receipt file"));
}

// =============================================================================
// VALIDATE
// =============================================================================

#[test]
fn test_validate_accepts() {
    let dir = TempDir::new().unwrap();
    let path = write_receipt(&dir, TARGET_RECEIPT);

    receipt_points()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Receipt is valid"));
}

#[test]
fn test_validate_rejects_with_reason() {
    let dir = TempDir::new().unwrap();
    let path = write_receipt(&dir, INVALID_RECEIPT);

    let output = receipt_points()
        .args(["--json", "validate"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(!output.status.success());

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["valid"], false);
    assert_eq!(body["error"], "there must be at least one item in receipt");
}

#[test]
fn test_validate_rejects_bad_date_layout() {
    let dir = TempDir::new().unwrap();
    let path = write_receipt(&dir, &TARGET_RECEIPT.replace("2022-01-01", "2022-1-1"));

    receipt_points()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("purchaseDate must be in format YYYY-MM-DD"));
}

// =============================================================================
// SERVE
// =============================================================================

#[test]
fn test_serve_rejects_zero_workers() {
    receipt_points()
        .args(["serve", "--workers", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("server.workers must be at least 1"));
}
