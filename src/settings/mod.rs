// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The ordered set of settings exported into the environment.
//!
//! ```text
//! CC        gcc
//! C_FLAGS   "  -std=gnu99    -Wall ... -fsanitize=address  "
//! C_LIBS    -lm -lbfd
//! SOURCES   src///
//! TESTS     tests/
//! BUILD     bulid
//! INTERVAL  100
//!
//! --set      NAME=VALUE  replace in place, or add a new entry
//! --append   NAME=WORDS  add words not already present
//! --subtract NAME=WORDS  drop the listed words
//! ```
//!
//! Values are stored verbatim. Only `append` and `subtract` re-join the
//! value with single spaces, since they operate on words.


use serde::Serialize;

use crate::error::EnvError;

/// Default polling interval in milliseconds, exported as `INTERVAL`.
pub const DEFAULT_INTERVAL: u64 = 100;

/// Default settings, in export order.
pub const DEFAULT_SETTINGS: [(&str, &str); 7] = [
    ("CC", "gcc"),
    (
        "C_FLAGS",
        "  -std=gnu99    -Wall -Wextra -Werror -Wpedantic -g -fsanitize=address  ",
    ),
    ("C_LIBS", "-lm -lbfd"),
    ("SOURCES", "src///"),
    ("TESTS", "tests/"),
    ("BUILD", "bulid"),
    ("INTERVAL", "100"),
];

/// A single exported `(name, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Setting {
    pub name: String,
    pub value: String,
}

/// Ordered name/value settings. Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvironmentSettings {
    entries: Vec<Setting>,
}

impl EnvironmentSettings {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The seven built-in settings.
    #[must_use]
    pub fn defaults() -> Self {
        Self::from_pairs(DEFAULT_SETTINGS)
    }

    /// Builds settings from pairs; later duplicates overwrite earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut settings = Self::new();
        for (name, value) in pairs {
            settings.set(name.as_ref(), value);
        }
        settings
    }

    /// Replaces the value of `name`, keeping its position, or appends it.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.position(name) {
            Some(index) => self.entries[index].value = value,
            None => self.entries.push(Setting {
                name: normalize_name(name),
                value,
            }),
        }
        self
    }

    /// Appends each word of `words` that the value does not already contain.
    pub fn append(&mut self, name: &str, words: &str) -> &mut Self {
        let mut current: Vec<&str> = self
            .get(name)
            .map(|v| v.split_whitespace().collect())
            .unwrap_or_default();
        for word in words.split_whitespace() {
            if !current.contains(&word) {
                current.push(word);
            }
        }
        let joined = current.join(" ");
        self.set(name, joined)
    }

    /// Removes every occurrence of each word in `words`.
    ///
    /// A missing setting is created with an empty value.
    pub fn subtract(&mut self, name: &str, words: &str) -> &mut Self {
        let remove: Vec<&str> = words.split_whitespace().collect();
        let remaining = self
            .get(name)
            .map(|v| {
                v.split_whitespace()
                    .filter(|w| !remove.contains(w))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default();
        self.set(name, remaining)
    }

    /// Applies a parsed command-line edit.
    pub fn apply(&mut self, edit: &SettingEdit) -> &mut Self {
        match edit.mode {
            EditMode::Set => self.set(&edit.name, edit.value.clone()),
            EditMode::Append => self.append(&edit.name, &edit.value),
            EditMode::Subtract => self.subtract(&edit.name, &edit.value),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name)
            .map(|index| self.entries[index].value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|s| (s.name.as_str(), s.value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `NAME=value` lines in export order.
    #[must_use]
    pub fn format_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(name))
    }
}

fn normalize_name(name: &str) -> String {
    name.to_ascii_uppercase()
}

/// How a [`SettingEdit`] combines with the existing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Set,
    Append,
    Subtract,
}

/// A `NAME=VALUE` edit given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingEdit {
    pub mode: EditMode,
    pub name: String,
    pub value: String,
}

impl SettingEdit {
    /// Splits `NAME=VALUE` at the first `=`. The value may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::MalformedAssignment`] when there is no `=` or the
    /// name is empty.
    pub fn parse(mode: EditMode, assignment: &str) -> Result<Self, EnvError> {
        match assignment.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => Ok(Self {
                mode,
                name: name.trim().to_string(),
                value: value.to_string(),
            }),
            _ => Err(EnvError::MalformedAssignment(assignment.to_string())),
        }
    }
}
