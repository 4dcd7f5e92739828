// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Exports settings into an environment store and dumps the result.
//!
//! ```text
//! initialize(store, settings, out)
//!    |
//!    +-- set_all   each (name, value) in order, last write wins
//!    '-- dump_all  every entry of the store, "name=value\n"
//! ```

use std::io::Write;

use tracing::{debug, info, instrument};

use super::EnvStore;
use crate::error::{AutocarResult, EnvError};
use crate::settings::EnvironmentSettings;

/// Writes every setting into `store`, in order.
///
/// Values are written verbatim. Returns the number of assignments made.
///
/// # Errors
///
/// Returns [`EnvError`] on the first name or value the store rejects; the
/// settings before it have already been written.
#[instrument(skip_all, fields(count = settings.len()))]
pub fn set_all<S>(store: &mut S, settings: &EnvironmentSettings) -> Result<usize, EnvError>
where
    S: EnvStore + ?Sized,
{
    let mut written = 0;
    for (name, value) in settings.iter() {
        store.set_var(name, value)?;
        debug!(name, value, "exported");
        written += 1;
    }
    Ok(written)
}

/// Writes every variable of `store` to `out` as `name=value` lines.
///
/// Inherited variables are included. Order is whatever the store yields.
///
/// # Errors
///
/// Returns [`crate::error::AutocarError::Io`] if writing to `out` fails.
pub fn dump_all<S, W>(store: &S, out: &mut W) -> AutocarResult<Vec<(String, String)>>
where
    S: EnvStore + ?Sized,
    W: Write + ?Sized,
{
    let vars = store.vars();
    for (name, value) in &vars {
        writeln!(out, "{name}={value}")?;
    }
    out.flush()?;
    Ok(vars)
}

/// Exports `settings` into `store`, then dumps the whole store to `out`.
///
/// # Errors
///
/// Propagates the errors of [`set_all`] and [`dump_all`].
pub fn initialize<S, W>(
    store: &mut S,
    settings: &EnvironmentSettings,
    out: &mut W,
) -> AutocarResult<Vec<(String, String)>>
where
    S: EnvStore + ?Sized,
    W: Write + ?Sized,
{
    let written = set_all(store, settings)?;
    let dumped = dump_all(store, out)?;
    info!(
        exported = written,
        total = dumped.len(),
        "environment initialized"
    );
    Ok(dumped)
}
