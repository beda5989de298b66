// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{NamedTempFile, TempDir};

use crate::unit::UnitSpec;

/// Unit file content for gzip 1.4, installed in /tmp.
pub const GZIP_UNIT: &str = r#"
name = "gzip"
version = "1.4"
description = "gzip (GNU zip) is a popular data compression program as a replacement for compress"
homepage = "http://www.gzip.org/"
installdir = "/tmp"
"#;

/// Parsed gzip 1.4 unit.
pub fn gzip_unit() -> UnitSpec {
    UnitSpec::parse(GZIP_UNIT, Path::new("gzip-1.4.toml")).unwrap()
}

/// Creates a temp directory with a minimal modgen.toml.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("modgen.toml"), config).unwrap();
    dir
}

/// Creates a directory tree from a list of paths.
///
/// Paths ending in `/` become directories, others become empty files.
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, entries: &[&str]) {
    for entry in entries {
        let full_path = root.join(entry);
        if entry.ends_with('/') {
            fs::create_dir_all(&full_path).unwrap();
            continue;
        }
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, "").unwrap();
    }
}

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}
