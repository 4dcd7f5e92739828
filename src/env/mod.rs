// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! EnvStore (trait)
//!   |-- ProcessEnv   the real process table (std::env)
//!   '-- MemoryEnv    detached BTreeMap<String, String> (run --dry-run)
//!
//! initializer::set_all(store, settings)  -> writes every setting
//! initializer::dump_all(store, out)      -> "name=value" per entry
//! ```
//!
//! Non-UTF-8 entries of the process table are read lossily.

pub mod initializer;
pub mod memory;
pub mod process;


use crate::error::EnvError;

pub use memory::MemoryEnv;
pub use process::ProcessEnv;

/// A writable table of environment variables.
pub trait EnvStore {
    /// Stores `value` under `name`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError`] if the name or value cannot be represented in an
    /// environment table.
    fn set_var(&mut self, name: &str, value: &str) -> Result<(), EnvError>;

    /// Looks up a single variable.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns every variable in the order the store yields them.
    fn vars(&self) -> Vec<(String, String)>;
}

/// Checks that a pair can be stored in a platform environment table.
///
/// Values are otherwise passed through untouched, whitespace included.
///
/// # Errors
///
/// Returns [`EnvError::InvalidName`] for empty names or names containing `=`
/// or NUL, and [`EnvError::InvalidValue`] for values containing NUL.
pub fn validate_assignment(name: &str, value: &str) -> Result<(), EnvError> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name.contains('=') {
        Some("contains '='")
    } else if name.contains('\0') {
        Some("contains a NUL byte")
    } else {
        None
    };

    if let Some(reason) = reason {
        return Err(EnvError::InvalidName {
            name: name.to_string(),
            reason,
        });
    }

    if value.contains('\0') {
        return Err(EnvError::InvalidValue {
            name: name.to_string(),
        });
    }

    Ok(())
}
