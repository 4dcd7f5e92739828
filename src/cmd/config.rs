// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands.

use std::io::Write;

use crate::cli::SettingsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::settings::EnvironmentSettings;

/// Display the resolved settings without touching the environment.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn run_settings_command<W: Write + ?Sized>(
    args: &SettingsArgs,
    settings: &EnvironmentSettings,
    out: &mut W,
) -> Result<()> {
    if args.json {
        serde_json::to_writer_pretty(&mut *out, settings)?;
        writeln!(out)?;
    } else {
        for line in settings.format_lines() {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Display current configuration options.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn run_options_command<W: Write + ?Sized>(config: &Config, out: &mut W) -> Result<()> {
    for line in config.format_options() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Display loaded configuration files.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn run_configs_command<W: Write + ?Sized>(config_files: &[String], out: &mut W) -> Result<()> {
    if config_files.is_empty() {
        writeln!(out, "No configuration files loaded")?;
    } else {
        for line in config_files {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
