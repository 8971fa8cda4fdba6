//! End-to-end tests for the sk-cli binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory with a small level manifest.
fn test_level() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("level1.txt"), "plane\nboat\nplane\n").unwrap();
    dir
}

fn sk() -> Command {
    Command::cargo_bin("sk").unwrap()
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[test]
fn run_renders_objects_in_manifest_order() {
    let dir = test_level();
    sk().args(["run", "level1.txt"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("plane\nboat\nplane"))
        .stdout(predicate::str::contains("Run complete"));
}

#[test]
fn run_warns_on_unknown_kinds_but_succeeds() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("level1.txt"), "plane\nunicorn\nboat\n").unwrap();

    sk().args(["run", "level1.txt"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("unicorn"))
        .stdout(predicate::str::contains("1 skipped"));
}

#[test]
fn run_with_missing_manifest_yields_empty_catalog() {
    let dir = TempDir::new().unwrap();
    sk().args(["run", "no-such-level.txt"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 objects"));
}

#[test]
fn run_respects_tick_count() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("level1.txt"), "ant\n").unwrap();

    sk().args(["run", "level1.txt", "--ticks", "3"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ant\nant\nant"))
        .stdout(predicate::str::contains("3 ticks"));
}

#[test]
fn run_json_emits_spawn_report() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("level1.txt"), "plane\nunicorn\n").unwrap();

    sk().args(["run", "level1.txt", "--json"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"spawned\": 1"))
        .stdout(predicate::str::contains("\"unicorn\""));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_on_known_kinds() {
    let dir = test_level();
    sk().args(["check", "level1.txt"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}

#[test]
fn check_fails_on_unknown_kinds() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("level1.txt"), "plane\nunicorn\nghost\n").unwrap();

    sk().args(["check", "level1.txt"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unicorn"))
        .stderr(predicate::str::contains("2 unknown kinds"));
}

// ---------------------------------------------------------------------------
// kinds
// ---------------------------------------------------------------------------

#[test]
fn kinds_lists_builtins_sorted() {
    sk().arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("ant"))
        .stdout(predicate::str::contains("boat"))
        .stdout(predicate::str::contains("plane"));
}
