// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --no-config       ← Skip autocar.toml lookup
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (defaults to --log-level)
//! --log-file FILE   ← Also log to FILE
//! --set NAME=VAL    ← Replace a setting
//! --append NAME=W   ← Add words to a setting
//! --subtract NAME=W ← Remove words from a setting
//!
//! Precedence: edits > CLI flags > AUTOCAR_* > --config > autocar.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::error::EnvError;
use crate::settings::{EditMode, SettingEdit};

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Disables the automatic `autocar.toml` lookup, only uses --config.
    #[arg(long = "no-config")]
    pub no_config: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Replaces a setting, such as 'CC=clang'. Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE", action = clap::ArgAction::Append)]
    pub set: Vec<String>,

    /// Appends words to a setting, such as 'C_LIBS=-lreadline'.
    /// Words already present are skipped.
    #[arg(short = 'a', long = "append", value_name = "NAME=WORDS", action = clap::ArgAction::Append)]
    pub append: Vec<String>,

    /// Removes words from a setting, such as 'C_FLAGS=-Werror'.
    #[arg(short = 'r', long = "subtract", value_name = "NAME=WORDS", action = clap::ArgAction::Append)]
    pub subtract: Vec<String>,
}

impl GlobalOptions {
    /// Converts logging flags to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level", level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level", level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file", path.display().to_string()));
        }

        overrides
    }

    /// Parses `--set`, then `--append`, then `--subtract`, each in given order.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::MalformedAssignment`] for an argument without `=`.
    pub fn setting_edits(&self) -> Result<Vec<SettingEdit>, EnvError> {
        let groups = [
            (EditMode::Set, &self.set),
            (EditMode::Append, &self.append),
            (EditMode::Subtract, &self.subtract),
        ];

        groups
            .into_iter()
            .flat_map(|(mode, values)| values.iter().map(move |v| SettingEdit::parse(mode, v)))
            .collect()
    }
}
