//! Integration tests for the tb CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a pool definition into a temp directory and return its path.
fn pool_file(dir: &TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("pool.json");
    fs::write(&path, json).unwrap();
    path
}

const FRUIT: &str = r#"{
    "bump": { "kind": "decay" },
    "options": [
        { "weight": 1, "payload": "apple" },
        { "weight": 1, "payload": "banana" }
    ]
}"#;

fn tb() -> Command {
    Command::cargo_bin("tb").unwrap()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_constant_dice() {
    tb().args(["roll", "4", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[4, 2] = 6"));
}

#[test]
fn roll_repeats_with_times() {
    let output = tb()
        .args(["roll", "{3}", "--times", "3", "--seed", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("[3] = 3").count(), 3);
}

#[test]
fn roll_is_reproducible_with_seed() {
    let run = || {
        tb().args(["roll", "3d6", "1..=100", "--seed", "42"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn roll_reports_seed() {
    tb().args(["roll", "d20", "--seed", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed=9"));
}

#[test]
fn roll_rejects_bad_dice() {
    tb().args(["roll", "nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse error"));
}

#[test]
fn roll_rejects_too_many_dice() {
    tb().args(["roll", "99999999999d6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many dice"));
}

#[test]
fn roll_rejects_reversed_range() {
    tb().args(["roll", "9..=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid range"));
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn draw_prints_payloads() {
    let dir = TempDir::new().unwrap();
    let path = pool_file(&dir, FRUIT);
    tb().args(["draw", path.to_str().unwrap(), "--count", "2", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("apple").and(predicate::str::contains("banana")));
}

#[test]
fn draw_single_option_repeats() {
    let dir = TempDir::new().unwrap();
    let path = pool_file(
        &dir,
        r#"{ "options": [ { "weight": 2, "payload": "only" } ] }"#,
    );
    let output = tb()
        .args(["draw", path.to_str().unwrap(), "-c", "4"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("only").count(), 4);
}

#[test]
fn draw_structured_payloads_print_as_json() {
    let dir = TempDir::new().unwrap();
    let path = pool_file(
        &dir,
        r#"{ "options": [ { "weight": 1, "payload": { "coins": 5 } } ] }"#,
    );
    tb().args(["draw", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"coins":5}"#));
}

#[test]
fn draw_stats_table() {
    let dir = TempDir::new().unwrap();
    let path = pool_file(&dir, FRUIT);
    tb().args(["draw", path.to_str().unwrap(), "-c", "5", "--stats"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Drawn")
                .and(predicate::str::contains("Current"))
                .and(predicate::str::contains("decay")),
        );
}

#[test]
fn draw_falls_back_when_exhausted() {
    let dir = TempDir::new().unwrap();
    let path = pool_file(&dir, FRUIT);
    tb().args(["draw", path.to_str().unwrap(), "-c", "6"])
        .assert()
        .success();
}

#[test]
fn draw_without_fallback_fails_when_exhausted() {
    let dir = TempDir::new().unwrap();
    let path = pool_file(&dir, FRUIT);
    tb().args(["draw", path.to_str().unwrap(), "-c", "3", "--no-fallback"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("round 3").and(predicate::str::contains("no option")));
}

#[test]
fn draw_missing_file() {
    tb().args(["draw", "/nonexistent/pool.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn draw_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = pool_file(&dir, "{ not json");
    tb().args(["draw", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pool file"));
}

#[test]
fn draw_empty_pool() {
    let dir = TempDir::new().unwrap();
    let path = pool_file(&dir, r#"{ "options": [] }"#);
    tb().args(["draw", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one option"));
}
