//! Extracted entries and their on-disk representation.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 1-based position of an entry in its source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

/// A piece of text found in a source file.
///
/// Only `filePath` and `content` are persisted; the position is kept for
/// console output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedEntry {
    pub file_path: String,
    pub content: String,
    #[serde(skip)]
    pub position: Position,
}

impl ExtractedEntry {
    pub fn new(file_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            content: content.into(),
            position: Position::default(),
        }
    }

    pub fn with_position(mut self, line: usize, col: usize) -> Self {
        self.position = Position { line, col };
        self
    }
}

/// Serialize entries as a pretty-printed JSON array.
pub fn results_to_json(entries: &[ExtractedEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries).context("Failed to serialize results.")
}

/// Write entries to `path`, creating parent directories as needed.
pub fn write_results(path: &Path, entries: &[ExtractedEntry]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, results_to_json(entries)?)
        .with_context(|| format!("Failed to write results: {}", path.display()))
}

pub fn read_results(path: &Path) -> Result<Vec<ExtractedEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read results: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse results: {}", path.display()))
}

/// The line printed for each English literal found in single-file mode.
pub fn english_report_line(entry: &ExtractedEntry) -> String {
    format!("Found English text in {}: {}", entry.file_path, entry.content)
}
