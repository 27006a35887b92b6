use std::{collections::HashSet, fs, path::Path};

use anyhow::{Result, bail};
use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::config::{DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS};

/// What the directory walk skips and what it keeps.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Entry names never descended into (or returned), at any depth.
    pub excluded_dirs: HashSet<String>,
    /// Extensions (without the dot) of the files to return.
    pub extensions: HashSet<String>,
    /// Glob patterns matched against the full path of each entry.
    pub ignores: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignores: Vec::new(),
        }
    }
}

/// Result of scanning files.
pub struct ScanResult {
    /// Matching files in depth-first, name-sorted order.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

/// Recursively collect source files under `base_dir`.
///
/// Symbolic links are neither followed nor returned. Fails when `base_dir`
/// is missing or is not a directory.
pub fn scan_files(base_dir: &Path, options: &ScanOptions, verbose: bool) -> Result<ScanResult> {
    let is_dir = fs::symlink_metadata(base_dir)
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if !is_dir {
        bail!("Directory not found: {}", base_dir.display());
    }

    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in &options.ignores {
        match Pattern::new(p) {
            Ok(pattern) => glob_patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(base_dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded(entry, options));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if entry.file_type().is_file() && is_scannable_file(path, &options.extensions) {
            files.push(path_str.into_owned());
        }
    }

    Ok(ScanResult {
        files,
        skipped_count,
    })
}

fn is_excluded(entry: &DirEntry, options: &ScanOptions) -> bool {
    if entry.path_is_symlink() {
        return true;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| options.excluded_dirs.contains(name))
}

fn is_scannable_file(path: &Path, extensions: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.contains(ext))
}
