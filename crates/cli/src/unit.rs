// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build unit descriptions.
//!
//! A build unit is a software package at one version, described by a small
//! TOML file:
//!
//! ```toml
//! name = "gzip"
//! version = "1.4"
//! description = "gzip (GNU zip) is a popular data compression program"
//! homepage = "http://www.gzip.org/"
//! dependencies = [{ name = "zlib", version = "1.2.8" }]
//!
//! [paths]
//! PATH = ["bin"]
//!
//! [aliases]
//! gz = "gzip -9"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::module::check_name_part;

/// Read-only view of a build unit, as needed by the module generator.
pub trait BuildUnit {
    fn name(&self) -> &str;
    fn version(&self) -> &str;
    fn description(&self) -> &str;
    fn homepage(&self) -> &str;
    /// Directory the software is (or will be) installed into.
    fn install_dir(&self) -> &Path;
}

/// A module the unit depends on, loaded before the unit's own environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dependency {
    pub name: String,
    pub version: String,
}

/// A build unit file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitSpec {
    pub name: String,
    pub version: String,
    pub description: String,
    pub homepage: String,

    /// Install directory (None = derived from the install prefix).
    #[serde(default)]
    pub installdir: Option<PathBuf>,

    /// Modules loaded before this one, in order.
    #[serde(default)]
    pub dependencies: Vec<Dependency>,

    /// Path variables to prepend (None = guessed from the install directory).
    #[serde(default)]
    pub paths: Option<BTreeMap<String, Vec<String>>>,

    /// Extra environment variables.
    #[serde(default)]
    pub env: BTreeMap<String, String>,

    /// Shell aliases defined while the module is loaded.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl UnitSpec {
    /// Load and validate a unit file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content, path)
    }

    /// Parse and validate unit file content. `path` is only used in errors.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let unit: UnitSpec = toml::from_str(content).map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        unit.validate()?;
        tracing::debug!("loaded unit {} from {}", unit.full_name(), path.display());
        Ok(unit)
    }

    /// Check that all required fields are non-empty and that the name,
    /// version and dependencies form valid `name/version` module names.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("version", &self.version),
            ("description", &self.description),
            ("homepage", &self.homepage),
        ] {
            if value.trim().is_empty() {
                return Err(Error::invalid(format!("unit field `{field}` is empty")));
            }
        }
        check_name_part("unit name", &self.name)?;
        check_name_part("unit version", &self.version)?;
        for dep in &self.dependencies {
            if dep.name.trim().is_empty() || dep.version.trim().is_empty() {
                return Err(Error::invalid(format!(
                    "dependency of {} needs both name and version",
                    self.name
                )));
            }
            check_name_part("dependency name", &dep.name)?;
            check_name_part("dependency version", &dep.version)?;
        }
        for name in self.aliases.keys() {
            check_name_part("alias name", name)?;
        }
        Ok(())
    }

    /// Module name in `name/version` form.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }

    pub fn with_install_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.installdir = Some(dir.into());
        self
    }

    /// Fill in the install directory from `prefix` if the file did not set one.
    ///
    /// The derived layout is `<prefix>/software/<name>/<version>`.
    pub fn resolve_install_dir(mut self, prefix: &Path) -> Self {
        if self.installdir.is_none() {
            let dir = prefix.join("software").join(&self.name).join(&self.version);
            tracing::debug!("derived install dir {}", dir.display());
            self.installdir = Some(dir);
        }
        self
    }
}

impl BuildUnit for UnitSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn homepage(&self) -> &str {
        &self.homepage
    }

    fn install_dir(&self) -> &Path {
        self.installdir.as_deref().unwrap_or(Path::new(""))
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
