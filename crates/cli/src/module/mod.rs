// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tcl environment module statements.
//!
//! Every function here is a pure text producer. The output is consumed
//! verbatim by the environment modules tool, so whitespace is part of the
//! contract: fields are separated by tabs and blocks indented by 4 spaces.

mod file;
mod requirements;

use crate::error::{Error, Result};
use crate::unit::BuildUnit;

pub use file::{ModuleFile, module_path};
pub use requirements::{DEFAULT_REQUIREMENTS, Requirements, guess};

/// Render the module header: help text, whatis line, root and conflict.
pub fn get_description(unit: &dyn BuildUnit) -> Result<String> {
    get_description_with(unit, true)
}

/// Render the module header, optionally leaving out the `conflict` line.
pub fn get_description_with(unit: &dyn BuildUnit, conflict: bool) -> Result<String> {
    check_name_part("module name", unit.name())?;
    let install_dir = unit.install_dir();
    if install_dir.as_os_str().is_empty() {
        return Err(Error::invalid(format!(
            "install directory of {} is empty",
            unit.name()
        )));
    }

    let text = format!("{} - Homepage: {}", unit.description(), unit.homepage());
    let mut out = format!(
        "#%Module\n\
         \n\
         proc ModulesHelp {{ }} {{\n    \
         puts stderr {{   {text}\n\
         }}\n\
         }}\n\
         \n\
         module-whatis {{{text}}}\n\
         \n\
         set root    {}\n",
        install_dir.display()
    );
    if conflict {
        out.push_str(&format!("\nconflict    {}\n", unit.name()));
    }
    Ok(out)
}

/// Load `name/version` unless it is already loaded.
pub fn load_module(name: &str, version: &str) -> Result<String> {
    check_name_part("module name", name)?;
    check_name_part("module version", version)?;
    Ok(format!(
        "\nif {{ ![is-loaded {name}/{version}] }} {{\n    module load {name}/{version}\n}}\n"
    ))
}

/// Unload `name` when some other version of it is loaded.
///
/// The outer guard checks that the exact `name/version` is absent, the inner
/// one that any version of `name` is present. Both conditions are required.
pub fn unload_module(name: &str, version: &str) -> Result<String> {
    check_name_part("module name", name)?;
    check_name_part("module version", version)?;
    Ok(format!(
        "\nif {{ ![is-loaded {name}/{version}] }} {{\n    \
         if {{ [is-loaded {name}] }} {{\n        \
         module unload {name}\n    \
         }}\n\
         }}\n"
    ))
}

/// Prepend `$root/<value>` to `key` for every value, in order.
pub fn prepend_paths<S: AsRef<str>>(key: &str, values: &[S]) -> Result<String> {
    require("variable name", key)?;
    Ok(values
        .iter()
        .map(|value| format!("prepend-path\t{key}\t\t$root/{}\n", value.as_ref()))
        .collect())
}

/// Set environment variable `key` to `value`.
pub fn set_environment(key: &str, value: &str) -> Result<String> {
    require("variable name", key)?;
    Ok(format!("setenv\t{key}\t\t{value}\n"))
}

/// A Tcl comment line.
pub fn comment(text: &str) -> String {
    format!("# {text}\n")
}

/// Define a shell alias while the module is loaded.
pub fn set_alias(name: &str, value: &str) -> Result<String> {
    require("alias name", name)?;
    Ok(format!("set-alias\t{name}\t\t\"{value}\"\n"))
}

/// Environment variable name for a software name, e.g. `EBROOTGCC`.
///
/// `-` becomes `MIN` and `+` becomes `PLUS` so the result is a valid
/// shell identifier for the usual package names.
pub fn env_var_name(prefix: &str, name: &str) -> String {
    let converted = name.replace('-', "MIN").replace('+', "PLUS");
    format!("{prefix}{}", converted.to_uppercase())
}

/// Check one component of a `name/version` module name.
///
/// The value becomes both a path component in the module tree and a word in
/// Tcl, so it must be a single plain segment: no separators, no `.`/`..`,
/// no whitespace or control characters.
pub fn check_name_part(what: &str, value: &str) -> Result<()> {
    require(what, value)?;
    if value == "." || value == ".." {
        return Err(Error::invalid(format!("{what} `{value}` is not a plain name")));
    }
    if let Some(c) = value
        .chars()
        .find(|c| matches!(c, '/' | '\\') || c.is_whitespace() || c.is_control())
    {
        return Err(Error::invalid(format!(
            "{what} `{}` contains {:?}",
            value.escape_debug(),
            c
        )));
    }
    Ok(())
}

fn require(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid(format!("{what} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
