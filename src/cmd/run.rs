// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The default command: export, then dump.

use std::io::Write;

use anyhow::Context;
use tracing::debug;

use crate::cli::RunArgs;
use crate::env::initializer::initialize;
use crate::env::{EnvStore, MemoryEnv, ProcessEnv};
use crate::error::Result;
use crate::settings::EnvironmentSettings;

/// Runs the `run` command against the process table, or against a snapshot of
/// it with `--dry-run`.
///
/// # Errors
///
/// Returns an error if a setting cannot be stored or `out` cannot be written.
pub fn run_command<W>(args: &RunArgs, settings: &EnvironmentSettings, out: &mut W) -> Result<()>
where
    W: Write + ?Sized,
{
    if args.dry_run {
        let mut snapshot = MemoryEnv::capture();
        debug!(inherited = snapshot.len(), "dry run on a snapshot");
        run_initialize_command(&mut snapshot, settings, out)
    } else {
        run_initialize_command(&mut ProcessEnv, settings, out)
    }
}

/// Exports `settings` into `store` and prints every variable to `out`.
///
/// # Errors
///
/// Returns an error if a setting cannot be stored or `out` cannot be written.
pub fn run_initialize_command<S, W>(
    store: &mut S,
    settings: &EnvironmentSettings,
    out: &mut W,
) -> Result<()>
where
    S: EnvStore + ?Sized,
    W: Write + ?Sized,
{
    initialize(store, settings, out).context("failed to initialize the environment")?;
    Ok(())
}
