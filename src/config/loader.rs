// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_str()
//!   .with_env_prefix()
//!   .set()
//!        |
//!        v
//!    build() --> Config
//! ```

use std::path::{Path, PathBuf};

use super::Config;
use crate::env::{EnvStore, ProcessEnv};
use crate::error::{AutocarError, ConfigError, Result};

/// Top-level tables an environment variable may address.
const SECTIONS: [&str; 3] = ["global", "settings", "extra"];

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `PREFIX_SECTION__KEY` variables when building.
    ///
    /// Only the `global`, `settings` and `extra` sections are read; other
    /// variables that share the prefix, such as `AUTOCAR_HOME`, are ignored.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override such as `global.output_log_level`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - Environment variables cannot be parsed.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    pub fn build(self) -> Result<Config> {
        let Self {
            builder,
            env_prefix,
            files,
        } = self;

        let builder = match &env_prefix {
            Some(prefix) => builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(section_vars(prefix, ProcessEnv.vars()))),
            ),
            None => builder,
        };
        let config = builder
            .build()
            .and_then(|cfg| cfg.try_deserialize::<Config>())
            .map_err(|e| {
                AutocarError::from(ConfigError::LoadError {
                    sources: describe_sources(&files, env_prefix.as_deref()),
                    message: e.to_string(),
                })
            })?;
        Ok(config)
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the `PREFIX_SECTION__KEY` variables whose section is one of
/// [`SECTIONS`], matching case-insensitively like the environment source does.
pub(crate) fn section_vars<I>(prefix: &str, vars: I) -> config::Map<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let head = format!("{prefix}_").to_ascii_lowercase();
    vars.into_iter()
        .filter(|(name, _)| {
            name.to_ascii_lowercase()
                .strip_prefix(&head)
                .and_then(|rest| rest.split_once("__"))
                .is_some_and(|(section, key)| !key.is_empty() && SECTIONS.contains(&section))
        })
        .collect()
}

fn describe_sources(files: &[(String, PathBuf)], env_prefix: Option<&str>) -> String {
    let mut sources: Vec<String> = files
        .iter()
        .map(|(_, path)| path.display().to_string())
        .collect();
    if let Some(prefix) = env_prefix {
        sources.push(format!("{prefix}_* environment"));
    }
    if sources.is_empty() {
        return "defaults".to_string();
    }
    sources.join(", ")
}
