//! Report formatting and printing utilities.
//!
//! Results go to stdout; diagnostics and warnings go to stderr in cargo
//! style. Kept apart from the core so textscout can be used as a library.

use std::{
    env,
    io::{self, Write},
    time::Duration,
};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, DetectSummary, InitSummary, ScanSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{ExtractedEntry, ParseDiagnostic, ScanMode, ScriptDetector, english_report_line};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// When set, elapsed time is not printed.
pub const DISABLE_TIMING_ENV: &str = "TEXTSCOUT_DISABLE_TIMING";

pub fn print(result: &CommandResult) {
    report_diagnostics_to(&result.diagnostics, &mut io::stderr().lock());

    match &result.summary {
        CommandSummary::Scan(summary) => {
            let mut out = io::stdout().lock();
            if result.verbose {
                print_entries_to(&summary.entries, &mut out);
            }
            print_scan_summary_to(summary, result.diagnostics.len(), &mut out);
            if env::var_os(DISABLE_TIMING_ENV).is_none() {
                print_timing_to(summary.elapsed, &mut out);
            }
        }
        CommandSummary::Detect(summary) => {
            print_detect_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Serve => {}
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }
}

/// Print every diagnostic, then a count of the affected files.
pub fn report_diagnostics_to<W: Write>(diagnostics: &[ParseDiagnostic], writer: &mut W) {
    if diagnostics.is_empty() {
        return;
    }

    for diagnostic in diagnostics {
        print_diagnostic_to(diagnostic, writer);
    }

    let _ = writeln!(
        writer,
        "{} {} {} could not be parsed",
        "warning:".bold().yellow(),
        diagnostics.len(),
        if diagnostics.len() == 1 { "file" } else { "files" }
    );
}

fn print_diagnostic_to<W: Write>(diagnostic: &ParseDiagnostic, writer: &mut W) {
    let _ = writeln!(writer, "{}: {}", "error".bold().red(), diagnostic.message);

    let (Some(line), Some(col)) = (diagnostic.line, diagnostic.column) else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), diagnostic.file_path);
        let _ = writeln!(writer);
        return;
    };

    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        diagnostic.file_path,
        line,
        col
    );

    let width = line.to_string().len();
    if let Some(source_line) = &diagnostic.source_line {
        let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = width);
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = width
        );
    }

    if let Some(caret) = &diagnostic.caret {
        let _ = writeln!(
            writer,
            "{:>width$} {} {}{}",
            "",
            "|".blue(),
            caret.trim_end_matches('^'),
            "^".red(),
            width = width
        );
    }

    let _ = writeln!(writer);
}

fn print_entries_to<W: Write>(entries: &[ExtractedEntry], writer: &mut W) {
    for entry in entries {
        let _ = writeln!(
            writer,
            "{}  {}",
            format!(
                "{}:{}:{}",
                entry.file_path, entry.position.line, entry.position.col
            )
            .dimmed(),
            entry.content
        );
    }
}

fn print_scan_summary_to<W: Write>(summary: &ScanSummary, failed: usize, writer: &mut W) {
    let found = summary.entries.len();
    let text = format!(
        "Scanned {} {} - found {} {} {}",
        summary.files_scanned,
        if summary.files_scanned == 1 { "file" } else { "files" },
        found,
        ScanMode::Arabic.detector().script_name(),
        if found == 1 { "text" } else { "texts" }
    );

    if failed == 0 {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), text.green());
    } else {
        let _ = writeln!(
            writer,
            "{} {} ({} skipped)",
            FAILURE_MARK.red(),
            text,
            failed
        );
    }

    if summary.skipped_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} could not be accessed",
            "warning:".bold().yellow(),
            summary.skipped_count,
            if summary.skipped_count == 1 { "path" } else { "paths" }
        );
    }

    let _ = writeln!(writer, "Results saved to {}", summary.output.display());
}

fn print_timing_to<W: Write>(elapsed: Duration, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}",
        format!("Finished in {:.2}s", elapsed.as_secs_f64()).dimmed()
    );
}

fn print_detect_to<W: Write>(summary: &DetectSummary, writer: &mut W) {
    for entry in &summary.entries {
        let _ = writeln!(writer, "{}", english_report_line(entry));
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!(
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}

// ============================================================
// Tests
// ============================================================
