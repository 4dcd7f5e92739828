// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The process environment table.

use super::EnvStore;
use crate::error::EnvError;

/// Handle to the environment of the running process.
///
/// Writes are only sound while no other thread reads or writes the table;
/// the binary performs them from `main` before spawning anything that
/// consults the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn set_var(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        super::validate_assignment(name, value)?;
        // SAFETY: the initializer runs on the main thread and nothing else in
        // this process touches the environment table concurrently. The only
        // background thread is the log file writer, which never reads it.
        unsafe {
            std::env::set_var(name, value);
        }
        Ok(())
    }

    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }

    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }
}
