//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_help() {
    cargo_bin_cmd!("listitem")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("listitem renders a single list item"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("listitem")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("listitem")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("listitem")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_item_help() {
    cargo_bin_cmd!("listitem")
        .args(["item", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Render a single list item"));
}

#[test]
fn test_missing_config_file_fails() {
    cargo_bin_cmd!("listitem")
        .args(["item", "--config", "does-not-exist.toml", "0", "a"])
        .assert()
        .failure();
}

#[test]
fn test_help_describes_config_discovery() {
    cargo_bin_cmd!("listitem")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(".listitem.toml"))
        .stdout(predicate::str::contains("item"))
        .stdout(predicate::str::contains("preview"));
}

#[test]
fn test_roman_conflicts_with_repeat() {
    cargo_bin_cmd!("listitem")
        .args(["item", "--roman", "--repeat", "2", "0", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_depth_out_of_range_is_rejected() {
    cargo_bin_cmd!("listitem")
        .args(["item", "18446744073709551615", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_empty_marker_list_is_an_error() {
    cargo_bin_cmd!("listitem")
        .args(["item", "--chars", ",,", "0", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: No markers in ',,'"));
}

#[test]
fn test_debug_log_reports_default_config() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("listitem")
        .current_dir(temp_dir.path())
        .env("HOME", temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .env("RUST_LOG", "debug")
        .args(["item", "0", "a"])
        .assert()
        .success()
        .stdout("- a\n")
        .stderr(predicate::str::contains("Using default config"));
}

#[test]
fn test_broken_discovered_config_is_skipped_with_warning() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("listitem.toml"), "indent = [").unwrap();

    cargo_bin_cmd!("listitem")
        .current_dir(temp_dir.path())
        .env("HOME", temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .env("RUST_LOG", "warn")
        .args(["item", "1", "a"])
        .assert()
        .success()
        .stdout("  * a\n")
        .stderr(predicate::str::contains("Skipping config"));
}
