// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Generate environment module files for software build units
#[derive(Parser)]
#[command(name = "modgen")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "MODGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the module file for a unit
    Generate(GenerateArgs),
    /// Show the parameters accepted in unit files
    Params(ParamsArgs),
}

#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Unit file (TOML)
    #[arg(value_name = "UNIT")]
    pub unit: PathBuf,

    /// Override the install directory
    #[arg(long, value_name = "DIR")]
    pub installdir: Option<PathBuf>,

    /// Do not emit a conflict line
    #[arg(long)]
    pub no_conflict: bool,

    /// Do not emit the generated-by comment
    #[arg(long)]
    pub no_header: bool,

    /// Print the module file instead of writing it
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Write the module file to this path instead of the module tree
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct ParamsArgs {
    /// Output format
    #[arg(short, long, default_value = "rst")]
    pub output: ParamsFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ParamsFormat {
    #[default]
    Rst,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
