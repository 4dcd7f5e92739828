// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. autocar.toml (cwd or nearest parent)
//! 3. --config FILE
//! 4. AUTOCAR_* env vars
//! 5. CLI overrides (--log-level, --log-file)
//! ```
//!
//! `--set`, `--append` and `--subtract` edit the resolved settings
//! afterwards; see [`crate::settings`].
//!
//! # Environment Variable Mapping
//!
//! ```text
//! AUTOCAR_SETTINGS__CC=clang          → settings.cc = "clang"
//! AUTOCAR_SETTINGS__INTERVAL=250      → settings.interval = 250
//! AUTOCAR_GLOBAL__OUTPUT_LOG_LEVEL=4  → global.output_log_level = 4
//! ```

pub mod discovery;
pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::settings::EnvironmentSettings;

use loader::ConfigLoader;
use types::{GlobalConfig, SettingsConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// The fixed exported settings.
    pub settings: SettingsConfig,
    /// Additional variables, exported after `settings` in name order.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use autocar_env::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("autocar.toml")
    ///     .with_env_prefix("AUTOCAR")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// The settings to export: `[settings]` in fixed order, then `[extra]`.
    #[must_use]
    pub fn environment_settings(&self) -> EnvironmentSettings {
        let mut settings = EnvironmentSettings::from_pairs(self.settings.pairs());
        for (name, value) in &self.extra {
            settings.set(name, value.clone());
        }
        settings
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );

        for (name, value) in self.settings.pairs() {
            options.insert(format!("settings.{}", name.to_ascii_lowercase()), value);
        }
        for (name, value) in &self.extra {
            options.insert(format!("extra.{name}"), value.clone());
        }

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value:?}"))
            .collect()
    }
}
