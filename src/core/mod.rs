//! Core pipeline: parse a source file, walk its syntax tree for text-bearing
//! nodes, classify the text and collect what passes.
//!
//! - `parsers`: swc front end and parse dialects
//! - `extract`: syntax tree walk and node lowering
//! - `detect`: script classification strategies
//! - `file_scanner`: directory walk
//! - `pipeline`: per-file and batch orchestration
//! - `diagnostic`: per-file failure reports
//! - `results`: extracted entries and their JSON form

pub mod detect;
pub mod diagnostic;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod pipeline;
pub mod results;

pub use detect::{ArabicDetector, Detector, EnglishDetector, ScanMode, ScriptDetector};
pub use diagnostic::ParseDiagnostic;
pub use extract::extract;
pub use file_scanner::{ScanOptions, ScanResult, scan_files};
pub use parsers::jsx::{Dialect, ParseError, ParsedSource, parse_source};
pub use pipeline::{ScanOutcome, SourceFile, scan_directory, scan_paths, scan_source, scan_sources};
pub use results::{
    ExtractedEntry, Position, english_report_line, read_results, results_to_json, write_results,
};
