// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!     AutocarError (16 bytes)
//!             |
//!     +-------+-------+
//!     |       |       |
//!     v       v       v
//!   Config   Env      Io
//!    Box     Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Config  LoadError, InvalidValue, NotFound
//!   Env     InvalidName, InvalidValue, MalformedAssignment
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`AutocarError`].
pub type AutocarResult<T> = std::result::Result<T, AutocarError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum two words wide. `Config` and
/// `Env` expose the sub-error as their source, so print with `{:#}` to see it.
#[derive(Debug, Error)]
pub enum AutocarError {
    /// Configuration error.
    #[error("config error")]
    Config(#[from] Box<ConfigError>),

    /// Environment table error.
    #[error("environment error")]
    Env(#[from] Box<EnvError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for AutocarError {
                fn from(err: $error) -> Self {
                    AutocarError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    EnvError => Env,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read, parse or merge the configuration sources.
    #[error("failed to load config from {sources}: {message}")]
    LoadError { sources: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Environment Errors ---

/// Errors raised while writing the environment table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    /// The name cannot be stored in an environment table.
    #[error("invalid variable name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// The value cannot be stored in an environment table.
    #[error("invalid value for '{name}': contains a NUL byte")]
    InvalidValue { name: String },

    /// A `NAME=VALUE` assignment could not be split.
    #[error("malformed assignment '{0}', expected NAME=VALUE")]
    MalformedAssignment(String),
}
