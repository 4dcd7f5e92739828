// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! autocar-env [global options] [command]
//! run          (default) export settings, dump the environment
//!   --dry-run  work on a snapshot, leave the process table alone
//! settings     print only the resolved settings
//! options      print the resolved configuration
//! configs      list the loaded configuration files
//! version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// Exports the autocar build settings into the environment.
#[derive(Debug, Parser)]
#[command(
    name = "autocar-env",
    author,
    version,
    about = "Exports the autocar build settings into the environment",
    long_about = "autocar-env Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Sets CC, C_FLAGS, C_LIBS, SOURCES, TESTS, BUILD and INTERVAL\n\
                  in the process environment and prints every environment\n\
                  variable as NAME=VALUE on standard output.",
    after_help = "CONFIG FILES:\n\n\
                  autocar-env looks for `autocar.toml` in the current directory\n\
                  and then in each parent directory; the closest one is loaded.\n\
                  Files given with --config are loaded after it and override it.\n\
                  AUTOCAR_SECTION__KEY environment variables override both.\n\
                  Use --no-config to skip the automatic lookup."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute, `run` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Exports the settings and prints the whole environment.
    Run(RunArgs),

    /// Prints only the resolved settings.
    Settings(SettingsArgs),

    /// Lists all configuration options and their values.
    Options,

    /// Lists the configuration files that were loaded.
    Configs,

    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Apply the settings to a copy of the environment and print it, sorted
    /// by name, without changing the process environment.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `settings` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SettingsArgs {
    /// Print a JSON array of {"name", "value"} objects instead of lines.
    #[arg(long)]
    pub json: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
