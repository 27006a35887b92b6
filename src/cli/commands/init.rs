use std::{fs, path::Path};

use anyhow::Result;

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    init_in(Path::new("."))
}

fn init_in(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    let created = if config_path.exists() {
        false
    } else {
        fs::write(&config_path, default_config_json()?)?;
        true
    };

    Ok(CommandResult::new(
        CommandSummary::Init(InitSummary { created }),
        Vec::new(),
        false,
    ))
}
