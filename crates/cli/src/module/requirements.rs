// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Guessing module path requirements from an install directory.

use std::collections::BTreeMap;
use std::path::Path;

/// Path variables and the subdirectories that usually feed them.
pub const DEFAULT_REQUIREMENTS: &[(&str, &[&str])] = &[
    ("ACLOCAL_PATH", &["share/aclocal"]),
    ("CPATH", &["include"]),
    ("LD_LIBRARY_PATH", &["lib", "lib64"]),
    ("LIBRARY_PATH", &["lib", "lib64"]),
    ("MANPATH", &["man", "share/man"]),
    ("PATH", &["bin", "sbin"]),
    ("PKG_CONFIG_PATH", &["lib/pkgconfig", "share/pkgconfig"]),
];

/// Path variable -> subdirectories relative to `$root`.
pub type Requirements = BTreeMap<String, Vec<String>>;

/// Keep the default candidates that exist as directories under `install_dir`.
///
/// Variables without any existing candidate are left out.
pub fn guess(install_dir: &Path) -> Requirements {
    let mut found = Requirements::new();
    for (key, candidates) in DEFAULT_REQUIREMENTS {
        let present: Vec<String> = candidates
            .iter()
            .filter(|sub| install_dir.join(sub).is_dir())
            .map(|sub| (*sub).to_string())
            .collect();
        if present.is_empty() {
            continue;
        }
        tracing::debug!("guessed {} = {:?}", key, present);
        found.insert((*key).to_string(), present);
    }
    found
}

#[cfg(test)]
#[path = "requirements_tests.rs"]
mod tests;
