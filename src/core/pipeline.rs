//! Parse, extract and classify, over one file or many.
//!
//! Files are processed independently and in parallel; results are collected
//! back in input order, so a batch always yields the same entries in the same
//! order as processing its files one by one.

use std::{fs, path::Path};

use anyhow::Result;
use rayon::prelude::*;

use super::{
    detect::ScanMode,
    diagnostic::ParseDiagnostic,
    extract::extract,
    file_scanner::{ScanOptions, scan_files},
    parsers::jsx::{Dialect, parse_source},
    results::ExtractedEntry,
};

/// An in-memory source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// Scan one source text.
///
/// A parse failure is returned as a diagnostic; the file then contributes no
/// entries.
pub fn scan_source(
    path: &str,
    source: &str,
    mode: ScanMode,
    dialect: Dialect,
) -> Result<Vec<ExtractedEntry>, ParseDiagnostic> {
    let parsed = parse_source(source, path, dialect)
        .map_err(|e| ParseDiagnostic::from_parse_error(path, source, &e))?;
    Ok(extract(&parsed, path, mode))
}

/// Entries and failures of a batch, both in input order.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub entries: Vec<ExtractedEntry>,
    pub diagnostics: Vec<ParseDiagnostic>,
    pub files_scanned: usize,
}

impl ScanOutcome {
    fn from_results(results: Vec<Result<Vec<ExtractedEntry>, ParseDiagnostic>>) -> Self {
        let mut outcome = ScanOutcome {
            files_scanned: results.len(),
            ..Default::default()
        };
        for result in results {
            match result {
                Ok(entries) => outcome.entries.extend(entries),
                Err(diagnostic) => outcome.diagnostics.push(diagnostic),
            }
        }
        outcome
    }

    pub fn has_failures(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

pub fn scan_sources(sources: &[SourceFile], mode: ScanMode, dialect: Dialect) -> ScanOutcome {
    let results: Vec<_> = sources
        .par_iter()
        .map(|file| scan_source(&file.path, &file.text, mode, dialect))
        .collect();

    ScanOutcome::from_results(results)
}

/// Read and scan files from disk. Unreadable files become diagnostics
/// without a location.
pub fn scan_paths(paths: &[String], mode: ScanMode, dialect: Dialect) -> ScanOutcome {
    let results: Vec<_> = paths
        .par_iter()
        .map(|path| match fs::read_to_string(path) {
            Ok(source) => scan_source(path, &source, mode, dialect),
            Err(e) => Err(ParseDiagnostic::without_location(
                path,
                format!("Failed to read file: {}", e),
            )),
        })
        .collect();

    ScanOutcome::from_results(results)
}

/// Walk `root` and scan every matching file.
///
/// Returns the outcome together with the number of paths the walk could not
/// access.
pub fn scan_directory(
    root: &Path,
    options: &ScanOptions,
    mode: ScanMode,
    dialect: Dialect,
    verbose: bool,
) -> Result<(ScanOutcome, usize)> {
    let scan = scan_files(root, options, verbose)?;
    let outcome = scan_paths(&scan.files, mode, dialect);
    Ok((outcome, scan.skipped_count))
}
