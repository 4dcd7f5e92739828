// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   run, settings, options, configs
//! ```
//!
//! Handlers write to the given writer so they can be driven from tests.

pub mod config;
pub mod run;

#[cfg(test)]
mod tests;
