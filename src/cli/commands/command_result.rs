use std::{path::PathBuf, time::Duration};

use super::super::exit_status::ExitStatus;
use crate::core::{ExtractedEntry, ParseDiagnostic};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Detect(DetectSummary),
    Serve,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub output: PathBuf,
    pub entries: Vec<ExtractedEntry>,
    pub files_scanned: usize,
    /// Paths the directory walk could not access.
    pub skipped_count: usize,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct DetectSummary {
    pub entries: Vec<ExtractedEntry>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running textscout commands
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Files that could not be read or parsed.
    pub diagnostics: Vec<ParseDiagnostic>,
    pub verbose: bool,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, diagnostics: Vec<ParseDiagnostic>, verbose: bool) -> Self {
        Self {
            summary,
            diagnostics,
            verbose,
        }
    }

    /// A scan that skipped files still completed; a single file that failed
    /// to parse leaves nothing to report.
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Scan(_) if !self.diagnostics.is_empty() => ExitStatus::Failure,
            CommandSummary::Detect(_) if !self.diagnostics.is_empty() => ExitStatus::Error,
            CommandSummary::Init(summary) if !summary.created => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
