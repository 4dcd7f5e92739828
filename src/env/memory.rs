// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! A detached environment table held in memory.

use std::collections::BTreeMap;

use super::{EnvStore, ProcessEnv};
use crate::error::EnvError;

/// Environment variables kept in a sorted map, apart from the process.
///
/// `run --dry-run` initializes a snapshot of the process table instead of
/// the table itself, so nothing the process later spawns sees the settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Snapshots the current process environment.
    #[must_use]
    pub fn capture() -> Self {
        ProcessEnv.vars().into_iter().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvStore for MemoryEnv {
    fn set_var(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        super::validate_assignment(name, value)?;
        self.vars.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
