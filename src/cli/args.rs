//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Find Arabic text in JSX markup across a directory
//! - `detect`: Find English string literals in a single file
//! - `serve`: Start the HTTP upload front end
//! - `init`: Initialize a textscout configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::{config::DEFAULT_PORT, core::Dialect};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Directory to scan (overrides `sourceRoot` from the config file)
    pub dir: Option<PathBuf>,

    /// File the JSON results are written to (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Parser dialect (overrides config file)
    #[arg(long, value_enum)]
    pub dialect: Option<Dialect>,

    /// List every entry with its position
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct DetectCommand {
    /// Source file to inspect
    pub file: PathBuf,

    /// Parser dialect
    #[arg(long, value_enum, default_value_t = Dialect::Minimal)]
    pub dialect: Dialect,
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory holding index.html and the other static assets
    /// (overrides config file)
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Parser dialect used for uploads
    #[arg(long, value_enum, default_value_t = Dialect::Minimal)]
    pub dialect: Dialect,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan a directory for Arabic text in JSX markup and save it as JSON
    Scan(ScanCommand),
    /// Print the English string literals of a single source file
    Detect(DetectCommand),
    /// Start the HTTP upload front end
    Serve(ServeCommand),
    /// Initialize a new .textscoutrc.json configuration file
    Init,
}
