// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Complete module files assembled from a unit.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::unit::{BuildUnit, UnitSpec};

use super::{
    check_name_part, comment, env_var_name, get_description_with, guess, load_module,
    prepend_paths, set_alias, set_environment,
};

/// Builder for the module file of one unit.
pub struct ModuleFile<'a> {
    unit: &'a UnitSpec,
    conflict: bool,
    header: bool,
}

impl<'a> ModuleFile<'a> {
    pub fn new(unit: &'a UnitSpec) -> Self {
        Self {
            unit,
            conflict: true,
            header: true,
        }
    }

    /// Emit a `conflict` line for the unit name (default: true).
    pub fn conflict(mut self, conflict: bool) -> Self {
        self.conflict = conflict;
        self
    }

    /// Emit a generated-by comment before the `#%Module` line (default: true).
    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Render the full module file.
    ///
    /// Sections: header, description, dependency loads, path prepends,
    /// EBROOT/EBVERSION variables, extra environment, aliases.
    pub fn render(&self) -> Result<String> {
        let unit = self.unit;
        let mut out = String::with_capacity(1024);

        if self.header {
            out.push_str(&comment(&format!(
                "Module file for {}, generated by modgen",
                unit.full_name()
            )));
        }
        out.push_str(&get_description_with(unit, self.conflict)?);

        for dep in &unit.dependencies {
            out.push_str(&load_module(&dep.name, &dep.version)?);
        }

        let requirements = match &unit.paths {
            Some(paths) => paths.clone(),
            None => guess(unit.install_dir()),
        };
        if !requirements.is_empty() {
            out.push('\n');
            for (key, values) in &requirements {
                out.push_str(&prepend_paths(key, values)?);
            }
        }

        out.push('\n');
        out.push_str(&set_environment(
            &env_var_name("EBROOT", unit.name()),
            "$root",
        )?);
        out.push_str(&set_environment(
            &env_var_name("EBVERSION", unit.name()),
            unit.version(),
        )?);
        for (key, value) in &unit.env {
            out.push_str(&set_environment(key, value)?);
        }

        if !unit.aliases.is_empty() {
            out.push('\n');
            for (name, value) in &unit.aliases {
                out.push_str(&set_alias(name, value)?);
            }
        }

        Ok(out)
    }

    /// Render and write the module file, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let text = self.render()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        std::fs::write(path, text).map_err(|e| Error::io(path, e))?;
        tracing::info!("wrote module file {}", path.display());
        Ok(())
    }
}

/// Location of a unit's module file in a module tree: `<root>/<name>/<version>`.
///
/// Name and version must each be a single normal path component, so the
/// result always stays under `module_root`.
pub fn module_path(module_root: &Path, unit: &dyn BuildUnit) -> Result<PathBuf> {
    let mut path = module_root.to_path_buf();
    for (what, part) in [("module name", unit.name()), ("module version", unit.version())] {
        check_name_part(what, part)?;
        let mut components = Path::new(part).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => path.push(part),
            _ => {
                return Err(Error::invalid(format!(
                    "{what} `{part}` is not a single path component"
                )));
            }
        }
    }
    Ok(path)
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
