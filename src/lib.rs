// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                     main.rs
//!                        |
//!             +----------+----------+
//!             v                     v
//!          cli (clap)          cmd (handlers)
//!             |             run / settings / ...
//!             +----------+----------+
//!                        v
//!           ,-------------------------,
//!           |         config          |
//!           | autocar.toml, AUTOCAR_* |
//!           '------------+------------'
//!                        v
//!                    settings
//!            CC C_FLAGS ... INTERVAL
//!                        |
//!                        v
//!                       env
//!          EnvStore: ProcessEnv | MemoryEnv
//!          initializer: set_all, dump_all
//!
//!   +-----------------------------------------+
//!   |  foundation       error, logging        |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod settings;
