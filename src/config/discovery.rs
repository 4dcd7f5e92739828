// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Locating `autocar.toml`.
//!
//! ```text
//! "autocar.toml"      cwd, then each parent up to the root
//! "conf/autocar.toml" relative to cwd only (contains a separator)
//! ```

use std::path::{Path, PathBuf};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "autocar.toml";

/// Finds a configuration file starting at `start`.
///
/// A bare file name is searched for in `start` and every ancestor; the
/// closest match wins. A name with a path separator is only checked
/// relative to `start`.
#[must_use]
pub fn find_config_file(start: &Path, name_or_path: &str) -> Option<PathBuf> {
    let candidate = Path::new(name_or_path);

    if candidate.is_absolute() || candidate.components().count() > 1 {
        let path = start.join(candidate);
        return path.is_file().then_some(path);
    }

    start
        .ancestors()
        .map(|dir| dir.join(candidate))
        .find(|path| path.is_file())
}
