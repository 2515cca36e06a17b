//! Item subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_item_default_bullets() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("listitem")
        .current_dir(temp_dir.path())
        .args(["item", "2", "a"])
        .assert()
        .success()
        .stdout("    + a\n");
}

#[test]
fn test_item_top_level_is_flush_left() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("listitem")
        .current_dir(temp_dir.path())
        .args(["item", "--indent", "    ", "0", "a"])
        .assert()
        .success()
        .stdout("- a\n");
}

#[test]
fn test_item_custom_indent_and_chars() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("listitem")
        .current_dir(temp_dir.path())
        .args(["item", "--chars", "A,B,C,D", "4", "a"])
        .assert()
        .success()
        .stdout("        A a\n");
}

#[test]
fn test_item_nobullet() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("listitem")
        .current_dir(temp_dir.path())
        .args(["item", "--nobullet", "2", "a"])
        .assert()
        .success()
        .stdout("    a\n");
}

#[test]
fn test_item_roman_range() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("listitem")
        .current_dir(temp_dir.path())
        .args([
            "item",
            "--chars",
            "1..100..10",
            "--roman",
            "--suffix",
            ".",
            "4",
            "a",
        ])
        .assert()
        .success()
        .stdout("        XLI. a\n");
}

#[test]
fn test_item_invalid_range() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("listitem")
        .current_dir(temp_dir.path())
        .args(["item", "--chars", "1..x", "0", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid range expression '1..x'"));
}

#[test]
fn test_item_uses_config_from_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".listitem.toml"),
        "indent = \"\"\nchars = \"1..5\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("listitem")
        .current_dir(temp_dir.path())
        .args(["item", "3", "a"])
        .assert()
        .success()
        .stdout("4 a\n");
}

#[test]
fn test_item_flags_override_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    fs::write(&config, "chars = [\"A\", \"B\"]\nnobullet = true\n").unwrap();

    cargo_bin_cmd!("listitem")
        .current_dir(temp_dir.path())
        .args(["item", "--config", config.to_str().unwrap(), "1", "a"])
        .assert()
        .success()
        .stdout("  a\n");

    cargo_bin_cmd!("listitem")
        .current_dir(temp_dir.path())
        .args(["item", "--config", config.to_str().unwrap()])
        .args(["--indent", "", "--repeat", "2", "1", "a"])
        .assert()
        .success()
        .stdout("a\n");
}

#[test]
fn test_item_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "nobullet = \"yes\"").unwrap();

    cargo_bin_cmd!("listitem")
        .args(["item", "--config", config.to_str().unwrap(), "0", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_item_deepest_supported_depth() {
    let temp_dir = TempDir::new().unwrap();

    // 65535 % 4 == 3
    cargo_bin_cmd!("listitem")
        .current_dir(temp_dir.path())
        .args(["item", "--indent", "", "65535", "a"])
        .assert()
        .success()
        .stdout("~ a\n");
}
