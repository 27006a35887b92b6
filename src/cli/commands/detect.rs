use std::fs;

use anyhow::{Context, Result};

use super::{
    super::args::DetectCommand,
    {CommandResult, CommandSummary, DetectSummary},
};
use crate::core::{ScanMode, scan_source};

/// Find the English string literals of a single file.
pub fn detect(cmd: DetectCommand) -> Result<CommandResult> {
    let file = cmd.file.to_string_lossy().into_owned();
    let source =
        fs::read_to_string(&cmd.file).with_context(|| format!("Failed to read file: {}", file))?;

    let (entries, diagnostics) = match scan_source(&file, &source, ScanMode::English, cmd.dialect) {
        Ok(entries) => (entries, Vec::new()),
        Err(diagnostic) => (Vec::new(), vec![diagnostic]),
    };

    Ok(CommandResult::new(
        CommandSummary::Detect(DetectSummary { entries }),
        diagnostics,
        false,
    ))
}
