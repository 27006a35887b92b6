use std::{env, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use colored::Colorize;

use super::{
    super::args::ScanCommand,
    {CommandResult, CommandSummary, ScanSummary},
};
use crate::{
    config::{ConfigLoadResult, load_config},
    core::{ScanMode, scan_directory, write_results},
};

/// Scan a directory for Arabic markup text and save the findings.
///
/// CLI arguments override the config file, which overrides the defaults.
pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let start = Instant::now();
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let ConfigLoadResult { config, from_file } = load_config(&cwd)?;

    if cmd.verbose && !from_file {
        eprintln!(
            "{} No config file found, using defaults",
            "note:".bold().cyan()
        );
    }

    let root = cmd
        .dir
        .unwrap_or_else(|| PathBuf::from(&config.source_root));
    let output = cmd.output.unwrap_or_else(|| PathBuf::from(&config.output));
    let dialect = cmd.dialect.unwrap_or(config.dialect);

    println!("Scanning directory: {}", root.display());

    let (outcome, skipped_count) = scan_directory(
        &root,
        &config.scan_options(),
        ScanMode::Arabic,
        dialect,
        cmd.verbose,
    )?;

    write_results(&output, &outcome.entries)?;

    Ok(CommandResult::new(
        CommandSummary::Scan(ScanSummary {
            output,
            entries: outcome.entries,
            files_scanned: outcome.files_scanned,
            skipped_count,
            elapsed: start.elapsed(),
        }),
        outcome.diagnostics,
        cmd.verbose,
    ))
}
