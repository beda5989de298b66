// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reference documentation for unit files.
//!
//! Renders the list of unit file parameters as an RST table or JSON.

mod json;
mod rst;
mod table;

use serde::Serialize;

use crate::cli::ParamsFormat;
use crate::error::Result;

pub use json::JsonFormatter;
pub use rst::RstFormatter;
pub use table::mk_rst_table;

/// One documented unit file parameter.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParamDoc {
    pub name: &'static str,
    pub description: &'static str,
    /// Default value, or an empty string when the parameter is required.
    pub default: &'static str,
}

/// All parameters accepted in a unit file, in file order.
pub const PARAMS: &[ParamDoc] = &[
    ParamDoc {
        name: "name",
        description: "Name of the software",
        default: "",
    },
    ParamDoc {
        name: "version",
        description: "Version of the software",
        default: "",
    },
    ParamDoc {
        name: "description",
        description: "Short description shown by module help and whatis",
        default: "",
    },
    ParamDoc {
        name: "homepage",
        description: "Project homepage, appended to the description",
        default: "",
    },
    ParamDoc {
        name: "installdir",
        description: "Install directory, exported as $root",
        default: "<prefix>/software/<name>/<version>",
    },
    ParamDoc {
        name: "dependencies",
        description: "Modules to load first, as {name, version} tables",
        default: "[]",
    },
    ParamDoc {
        name: "paths",
        description: "Path variables to prepend, relative to $root",
        default: "guessed from install directory",
    },
    ParamDoc {
        name: "env",
        description: "Extra environment variables to set",
        default: "{}",
    },
    ParamDoc {
        name: "aliases",
        description: "Shell aliases defined while the module is loaded",
        default: "{}",
    },
];

/// Formats parameter documentation.
pub trait ParamsFormatter {
    fn format(&self, params: &[ParamDoc]) -> Result<String>;
}

/// Format the unit file parameters in the requested format.
pub fn format_params(format: ParamsFormat) -> Result<String> {
    let formatter: Box<dyn ParamsFormatter> = match format {
        ParamsFormat::Rst => Box::new(RstFormatter),
        ParamsFormat::Json => Box::new(JsonFormatter),
    };
    formatter.format(PARAMS)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
