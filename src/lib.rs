//! textscout - hardcoded text finder for JS/TS UI codebases
//!
//! textscout parses JavaScript/TypeScript (JSX/TSX) sources with swc, walks the
//! syntax tree for text-bearing nodes and classifies them by script. It is used
//! to audit internationalization coverage: Arabic text left in component markup
//! (directory scan) or English string literals left in a single file (detect).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (scan, detect, serve, init)
//! - `config`: Configuration file loading and parsing
//! - `core`: Parse, extract and classify pipeline
//! - `server`: HTTP upload front end for single-file detection
//! - `utils`: Shared script-range helpers

pub mod cli;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;
