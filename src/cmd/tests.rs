// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::config::{run_configs_command, run_options_command, run_settings_command};
use super::run::{run_command, run_initialize_command};
use crate::cli::{RunArgs, SettingsArgs};
use crate::config::Config;
use crate::env::MemoryEnv;
use crate::settings::EnvironmentSettings;

fn render(f: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut out = Vec::new();
    f(&mut out);
    String::from_utf8(out).unwrap()
}

#[test]
fn test_settings_command_lines() {
    let settings = EnvironmentSettings::from_pairs([("CC", "gcc"), ("INTERVAL", "100")]);
    let text = render(|out| {
        run_settings_command(&SettingsArgs::default(), &settings, out).unwrap();
    });
    insta::assert_snapshot!(text, @r"
    CC=gcc
    INTERVAL=100
    ");
}

#[test]
fn test_settings_command_json() {
    let settings = EnvironmentSettings::from_pairs([("BUILD", "bulid")]);
    let text = render(|out| {
        run_settings_command(&SettingsArgs { json: true }, &settings, out).unwrap();
    });
    insta::assert_snapshot!(text, @r#"
    [
      {
        "name": "BUILD",
        "value": "bulid"
      }
    ]
    "#);
}

#[test]
fn test_configs_command_empty() {
    let text = render(|out| run_configs_command(&[], out).unwrap());
    assert_eq!(text, "No configuration files loaded\n");
}

#[test]
fn test_configs_command_lists_files() {
    let files = ["1. [file] /work/autocar.toml".to_string()];
    let text = render(|out| run_configs_command(&files, out).unwrap());
    assert_eq!(text, "1. [file] /work/autocar.toml\n");
}

#[test]
fn test_options_command() {
    let text = render(|out| run_options_command(&Config::default(), out).unwrap());
    assert_eq!(text.lines().count(), 10);
    assert!(text.lines().any(|l| l.starts_with("settings.cc") && l.ends_with("\"gcc\"")));
}

#[test]
fn test_initialize_command_into_memory() {
    let mut env = MemoryEnv::new();
    let text = render(|out| {
        run_initialize_command(&mut env, &EnvironmentSettings::defaults(), out).unwrap();
    });
    assert_eq!(text.lines().count(), 7);
    assert!(text.contains("BUILD=bulid\n"));
}

#[test]
fn test_initialize_command_reports_invalid_name() {
    let mut env = MemoryEnv::new();
    let settings = EnvironmentSettings::from_pairs([("A=B", "x")]);
    let err = run_initialize_command(&mut env, &settings, &mut Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "failed to initialize the environment");
    assert_eq!(
        err.root_cause().to_string(),
        "invalid variable name 'A=B': contains '='"
    );
}

#[test]
fn test_dry_run_leaves_process_env_untouched() {
    let settings = EnvironmentSettings::from_pairs([("AUTOCAR_DRY_RUN_MARKER", "set")]);
    let text = render(|out| {
        run_command(&RunArgs { dry_run: true }, &settings, out).unwrap();
    });

    assert!(text.lines().any(|line| line == "AUTOCAR_DRY_RUN_MARKER=set"));
    assert!(std::env::var_os("AUTOCAR_DRY_RUN_MARKER").is_none());
}
