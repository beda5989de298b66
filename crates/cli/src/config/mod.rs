// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading from `modgen.toml`.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config format version (must be 1).
    pub version: i64,

    /// Root of the software installation.
    #[serde(default = "Config::default_install_prefix")]
    pub install_prefix: PathBuf,

    /// Module tree, relative to `install_prefix` unless absolute.
    #[serde(default = "Config::default_module_dir")]
    pub module_dir: PathBuf,

    /// Emit a `conflict` line in generated modules.
    #[serde(default = "Config::default_conflict")]
    pub conflict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::VERSION,
            install_prefix: Self::default_install_prefix(),
            module_dir: Self::default_module_dir(),
            conflict: Self::default_conflict(),
        }
    }
}

impl Config {
    fn default_install_prefix() -> PathBuf {
        PathBuf::from(defaults::INSTALL_PREFIX)
    }

    fn default_module_dir() -> PathBuf {
        PathBuf::from(defaults::MODULE_DIR)
    }

    fn default_conflict() -> bool {
        true
    }

    /// Directory module files are written into.
    pub fn module_root(&self) -> PathBuf {
        // join() replaces the prefix when module_dir is absolute
        self.install_prefix.join(&self.module_dir)
    }
}

/// Load configuration from a file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse(&content, path)
}

/// Parse configuration content. `path` is only used in errors.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    if config.version != defaults::VERSION {
        return Err(Error::UnsupportedVersion(config.version));
    }
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Load the explicit config if given, else the discovered one, else defaults.
pub fn resolve(explicit: Option<&Path>, start_dir: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        return load(path);
    }
    match crate::discovery::find_config(start_dir) {
        Some(path) => load(&path),
        None => {
            tracing::debug!("no {} found, using defaults", defaults::CONFIG_FILE);
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
