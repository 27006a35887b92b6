use std::{env, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use colored::Colorize;

use super::{
    super::args::ServeCommand,
    {CommandResult, CommandSummary},
};
use crate::{
    config::load_config,
    server::{AppState, run_server},
};

/// Run the HTTP front end until Ctrl+C.
pub fn serve(cmd: ServeCommand) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&cwd)?.config;

    let static_dir = cmd
        .static_dir
        .unwrap_or_else(|| PathBuf::from(&config.static_dir));
    if !static_dir.is_dir() {
        eprintln!(
            "{} Static directory not found: {}",
            "warning:".bold().yellow(),
            static_dir.display()
        );
    }

    run_server(
        cmd.port,
        AppState {
            static_dir,
            dialect: cmd.dialect,
            detect_timeout: Duration::from_secs(config.detect_timeout_secs),
        },
    )?;

    Ok(CommandResult::new(CommandSummary::Serve, Vec::new(), false))
}
