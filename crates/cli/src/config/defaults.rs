// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Config file name looked up during discovery.
pub const CONFIG_FILE: &str = "modgen.toml";

/// The only supported config version.
pub const VERSION: i64 = 1;

/// Default root under which software and modules are installed.
pub const INSTALL_PREFIX: &str = "/opt/apps";

/// Default module tree, relative to the install prefix.
pub const MODULE_DIR: &str = "modules/all";
