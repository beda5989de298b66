//! Test helpers for behavioral specifications.
//!
//! Provides helpers for running the modgen binary against fixtures.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::process::Command;

/// Returns a Command configured to run the modgen binary
pub fn modgen_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("modgen"));
    cmd.env_remove("MODGEN_CONFIG").env_remove("MODGEN_LOG");
    cmd
}

/// Get path to a test fixture
pub fn fixture(name: &str) -> std::path::PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    std::path::PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}
