// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Library error type.

use std::path::PathBuf;

/// Errors produced while rendering modules, tables, or loading files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required argument was empty or otherwise unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The number of table columns differs from the number of titles.
    #[error("table has {titles} titles but {columns} columns")]
    MismatchedRowWidth { titles: usize, columns: usize },

    /// A table column has a different cell count than the first column.
    #[error("table column {column} has {len} cells, expected {expected}")]
    MismatchedColumnLength {
        column: usize,
        len: usize,
        expected: usize,
    },

    /// A TOML file could not be parsed.
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The config file declares a version this build does not understand.
    #[error("unsupported config version {0} (expected 1)")]
    UnsupportedVersion(i64),

    #[error("failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
