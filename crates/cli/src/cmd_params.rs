// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Params command implementation.

use std::io::Write;

use modgen::cli::ParamsArgs;
use modgen::docs;

/// Run the params command.
pub fn run(args: &ParamsArgs) -> anyhow::Result<()> {
    let text = docs::format_params(args.output)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{}", text)?;
    if !text.ends_with('\n') {
        writeln!(handle)?;
    }
    Ok(())
}
