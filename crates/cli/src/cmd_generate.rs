// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Generate command implementation.

use std::io::Write;

use anyhow::Context;

use modgen::cli::{Cli, GenerateArgs};
use modgen::config;
use modgen::module::{ModuleFile, module_path};
use modgen::unit::UnitSpec;

/// Run the generate command.
pub fn run(cli: &Cli, args: &GenerateArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = config::resolve(cli.config.as_deref(), &cwd).context("failed to load config")?;

    let mut unit = UnitSpec::load(&args.unit)
        .with_context(|| format!("failed to load unit {}", args.unit.display()))?;
    if let Some(ref dir) = args.installdir {
        unit = unit.with_install_dir(dir);
    }
    let unit = unit.resolve_install_dir(&config.install_prefix);

    let module = ModuleFile::new(&unit)
        .conflict(config.conflict && !args.no_conflict)
        .header(!args.no_header);

    if args.stdout {
        let text = module.render()?;
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write!(handle, "{}", text)?;
        return Ok(());
    }

    let path = match args.output {
        Some(ref path) => path.clone(),
        None => module_path(&config.module_root(), &unit)?,
    };
    module
        .write_to(&path)
        .with_context(|| format!("failed to write module for {}", unit.full_name()))?;
    println!("{}", path.display());
    Ok(())
}
