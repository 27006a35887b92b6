use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, detect::detect, init::init, scan::scan, serve::serve,
    },
};

/// Dispatch to the handler of the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Detect(cmd)) => detect(cmd),
        Some(Command::Serve(cmd)) => serve(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
