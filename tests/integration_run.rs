// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end tests driving the `autocar-env` binary.
//!
//! Every test clears the child's environment so the output only contains
//! what the test put there.

use std::path::Path;
use std::process::{Command, Output};

const DEFAULT_LINES: [&str; 7] = [
    "CC=gcc",
    "C_FLAGS=  -std=gnu99    -Wall -Wextra -Werror -Wpedantic -g -fsanitize=address  ",
    "C_LIBS=-lm -lbfd",
    "SOURCES=src///",
    "TESTS=tests/",
    "BUILD=bulid",
    "INTERVAL=100",
];

fn autocar_env(cwd: &Path, args: &[&str], vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_autocar-env"))
        .args(args)
        .current_dir(cwd)
        .env_clear()
        .envs(vars.iter().copied())
        .output()
        .expect("failed to spawn autocar-env")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

fn sorted(lines: &[&str]) -> Vec<String> {
    let mut lines: Vec<String> = lines.iter().map(|s| (*s).to_string()).collect();
    lines.sort();
    lines
}

// =============================================================================
// Default run
// =============================================================================

#[test]
fn run_clean_environment_prints_exactly_the_settings() {
    let dir = tempfile::tempdir().unwrap();
    let output = autocar_env(dir.path(), &["--no-config"], &[]);
    assert!(output.status.success(), "{output:?}");

    let mut lines = stdout_lines(&output);
    lines.sort();
    assert_eq!(lines, sorted(&DEFAULT_LINES));
}

#[test]
fn run_includes_inherited_variables() {
    let dir = tempfile::tempdir().unwrap();
    let output = autocar_env(
        dir.path(),
        &["--no-config", "run"],
        &[("HOME", "/home/dev"), ("CC", "tcc")],
    );
    assert!(output.status.success(), "{output:?}");

    let lines = stdout_lines(&output);
    assert!(lines.iter().any(|l| l == "HOME=/home/dev"));
    assert!(lines.iter().any(|l| l == "CC=gcc"));
    assert!(!lines.iter().any(|l| l == "CC=tcc"));
    assert!(lines.iter().any(|l| l == "INTERVAL=100"));
    assert_eq!(lines.len(), 8);
}

#[test]
fn run_output_has_no_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let output = autocar_env(dir.path(), &["--no-config"], &[("LANG", "C")]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.ends_with('\n'));
    for line in stdout.lines() {
        let (name, _) = line.split_once('=').expect("line without '='");
        assert!(!name.is_empty(), "empty name in {line:?}");
    }
}

#[test]
fn run_twice_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let first = autocar_env(dir.path(), &["--no-config"], &[]);
    let inherited: Vec<(String, String)> = stdout_lines(&first)
        .iter()
        .filter_map(|l| l.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let mut second = Command::new(env!("CARGO_BIN_EXE_autocar-env"));
    second
        .arg("--no-config")
        .current_dir(dir.path())
        .env_clear()
        .envs(inherited);
    let second = second.output().unwrap();

    let mut a = stdout_lines(&first);
    let mut b = stdout_lines(&second);
    a.sort();
    b.sort();
    assert_eq!(a, b);
}

// =============================================================================
// Configuration sources
// =============================================================================

#[test]
fn run_uses_discovered_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("src");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(
        dir.path().join("autocar.toml"),
        "[settings]\ncc = \"clang\"\n\n[extra]\ndiff = \"diff -u\"\n",
    )
    .unwrap();

    let output = autocar_env(&nested, &["settings"], &[]);
    assert!(output.status.success(), "{output:?}");
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "CC=clang");
    assert_eq!(lines.last().map(String::as_str), Some("DIFF=diff -u"));
}

#[test]
fn run_no_config_ignores_discovered_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("autocar.toml"), "[settings]\ncc = \"clang\"\n").unwrap();

    let output = autocar_env(dir.path(), &["--no-config", "settings"], &[]);
    assert_eq!(stdout_lines(&output), DEFAULT_LINES);
}

#[test]
fn run_env_prefix_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let output = autocar_env(
        dir.path(),
        &["--no-config", "settings"],
        &[
            ("AUTOCAR_SETTINGS__INTERVAL", "250"),
            ("AUTOCAR_SETTINGS__C_LIBS", "-lm"),
        ],
    );
    assert!(output.status.success(), "{output:?}");
    let lines = stdout_lines(&output);
    assert!(lines.iter().any(|l| l == "INTERVAL=250"));
    assert!(lines.iter().any(|l| l == "C_LIBS=-lm"));
}

#[test]
fn run_ignores_unrelated_prefixed_variables() {
    let dir = tempfile::tempdir().unwrap();
    let output = autocar_env(
        dir.path(),
        &["--no-config"],
        &[
            ("AUTOCAR_HOME", "/opt/autocar"),
            ("AUTOCAR_SETTINGS__CC", "clang"),
        ],
    );
    assert!(output.status.success(), "{output:?}");

    let lines = stdout_lines(&output);
    assert!(lines.iter().any(|l| l == "AUTOCAR_HOME=/opt/autocar"));
    assert!(lines.iter().any(|l| l == "CC=clang"));
    assert_eq!(lines.len(), 9);
}

#[test]
fn run_dry_run_prints_sorted_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let output = autocar_env(
        dir.path(),
        &["--no-config", "run", "--dry-run"],
        &[("HOME", "/home/dev")],
    );
    assert!(output.status.success(), "{output:?}");

    let mut expected = sorted(&DEFAULT_LINES);
    expected.push("HOME=/home/dev".to_string());
    expected.sort();
    assert_eq!(stdout_lines(&output), expected);
}

#[test]
fn run_cli_edits_reach_the_environment() {
    let dir = tempfile::tempdir().unwrap();
    let output = autocar_env(
        dir.path(),
        &["--no-config", "-s", "BUILD=build", "-a", "C_LIBS=-lreadline"],
        &[],
    );
    let lines = stdout_lines(&output);
    assert!(lines.iter().any(|l| l == "BUILD=build"));
    assert!(lines.iter().any(|l| l == "C_LIBS=-lm -lbfd -lreadline"));
}

#[test]
fn configs_lists_loaded_files() {
    let dir = tempfile::tempdir().unwrap();
    let extra = dir.path().join("extra.toml");
    std::fs::write(&extra, "").unwrap();

    let output = autocar_env(
        dir.path(),
        &["--no-config", "--config", "extra.toml", "configs"],
        &[],
    );
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout_lines(&output), ["1. [file] extra.toml"]);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = autocar_env(dir.path(), &["--config", "missing.toml"], &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("config error: config file not found: missing.toml")
    );
}

#[test]
fn invalid_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("autocar.toml"),
        "[settings]\ninterval = \"soon\"\n",
    )
    .unwrap();
    let output = autocar_env(dir.path(), &[], &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: config error: failed to load config from "), "{stderr}");
    assert_eq!(stderr.matches("failed to load config").count(), 1, "{stderr}");
}

#[test]
fn malformed_edit_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = autocar_env(dir.path(), &["--no-config", "--set", "CC"], &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("malformed assignment 'CC'"));
}

#[test]
fn empty_edit_name_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = autocar_env(dir.path(), &["--no-config", "--set", "=x"], &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn version_prints_crate_version() {
    let dir = tempfile::tempdir().unwrap();
    let output = autocar_env(dir.path(), &["version"], &[]);
    assert_eq!(stdout_lines(&output), [env!("CARGO_PKG_VERSION")]);
}
