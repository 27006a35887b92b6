//! Per-file failure reports.
//!
//! A file that cannot be read or parsed is turned into a `ParseDiagnostic`
//! and skipped; the rest of the scan carries on.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use super::parsers::jsx::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub file_path: String,
    pub message: String,
    /// 1-based line of the error, when known.
    pub line: Option<usize>,
    /// 1-based column of the error, when known.
    pub column: Option<usize>,
    /// The offending source line, without its line terminator.
    pub source_line: Option<String>,
    /// Padding as wide as the text before `column`, followed by `^`.
    pub caret: Option<String>,
}

impl ParseDiagnostic {
    pub fn from_parse_error(file_path: &str, source: &str, error: &ParseError) -> Self {
        let source_line = error.line.and_then(|line| source_line_at(source, line));
        // Errors at end of input can land past the last character.
        let column = match (&source_line, error.column) {
            (Some(text), Some(column)) => Some(column.min(text.chars().count() + 1)),
            (_, column) => column,
        };
        let caret = match (&source_line, column) {
            (Some(text), Some(column)) => Some(caret_marker(text, column)),
            _ => None,
        };

        Self {
            file_path: file_path.to_string(),
            message: error.message.clone(),
            line: error.line,
            column,
            source_line,
            caret,
        }
    }

    /// A failure with no position, e.g. an unreadable file.
    pub fn without_location(file_path: &str, message: impl Into<String>) -> Self {
        Self {
            file_path: file_path.to_string(),
            message: message.into(),
            line: None,
            column: None,
            source_line: None,
            caret: None,
        }
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error processing {}: {}", self.file_path, self.message)?;
        if let (Some(line), Some(column)) = (self.line, self.column) {
            write!(f, "\nError location: Line {}, Column {}", line, column)?;
        }
        if let (Some(source_line), Some(caret)) = (&self.source_line, &self.caret) {
            write!(f, "\n{}\n{}", source_line, caret)?;
        }
        Ok(())
    }
}

/// Slice line `line` (1-based) out of `source`.
pub fn source_line_at(source: &str, line: usize) -> Option<String> {
    let index = line.checked_sub(1)?;
    source
        .split('\n')
        .nth(index)
        .map(|l| l.trim_end_matches('\r').to_string())
}

/// Caret pointing at a 1-based character column of `line`, padded to the
/// display width of the characters before it.
pub fn caret_marker(line: &str, column: usize) -> String {
    let prefix: String = line.chars().take(column.saturating_sub(1)).collect();
    format!("{}^", " ".repeat(UnicodeWidthStr::width(prefix.as_str())))
}
