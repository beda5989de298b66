// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! modgen library.
//!
//! Renders Tcl environment module files for software build units and
//! RST tables for the documentation of unit files.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod docs;
pub mod error;
pub mod module;
pub mod unit;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result};
