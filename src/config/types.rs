// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [global]    log levels, log file
//! [settings]  the seven exported values
//! [extra]     additional NAME = "value" pairs
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;
use crate::settings::{DEFAULT_INTERVAL, DEFAULT_SETTINGS};

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stderr output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. No file is written when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Values exported as `CC`, `C_FLAGS`, `C_LIBS`, `SOURCES`, `TESTS`, `BUILD`
/// and `INTERVAL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsConfig {
    /// Compiler executable.
    pub cc: String,
    /// Compiler flags, passed through verbatim.
    pub c_flags: String,
    /// Linker library flags.
    pub c_libs: String,
    /// Source directory.
    pub sources: String,
    /// Test directory.
    pub tests: String,
    /// Build output directory.
    pub build: String,
    /// Polling interval in milliseconds.
    pub interval: u64,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        let [cc, c_flags, c_libs, sources, tests, build, _] =
            DEFAULT_SETTINGS.map(|(_, value)| value.to_string());
        Self {
            cc,
            c_flags,
            c_libs,
            sources,
            tests,
            build,
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl SettingsConfig {
    /// Pairs in export order.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, String); 7] {
        [
            ("CC", self.cc.clone()),
            ("C_FLAGS", self.c_flags.clone()),
            ("C_LIBS", self.c_libs.clone()),
            ("SOURCES", self.sources.clone()),
            ("TESTS", self.tests.clone()),
            ("BUILD", self.build.clone()),
            ("INTERVAL", self.interval.to_string()),
        ]
    }
}
