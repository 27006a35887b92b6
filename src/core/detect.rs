//! Script classification predicates.
//!
//! Two independent strategies exist, one per scan mode. They are never
//! combined: the entry point picks a `ScanMode` and the extractor asks that
//! mode's `Detector` about every candidate text.

use std::sync::LazyLock;

use enum_dispatch::enum_dispatch;
use regex::Regex;

use crate::utils::{contains_arabic, is_ascii_digits};

/// Letters, digits, common punctuation and whitespace, with nothing else.
static ENGLISH_TEXT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[A-Za-z0-9.,!?()":;'\-\s]+$"#).unwrap());

/// Minimum number of characters (exclusive) for Arabic text to count.
const MIN_ARABIC_LEN: usize = 2;

/// Trait implemented by every classification strategy.
#[enum_dispatch]
pub trait ScriptDetector {
    /// Whether `text` belongs to the detector's script.
    fn matches(&self, text: &str) -> bool;

    /// Short name used in reports.
    fn script_name(&self) -> &'static str;
}

/// Arabic-script detector used by directory scans.
///
/// Text passes when, after trimming, it is longer than two characters,
/// contains a code point from one of the Arabic blocks and is not made of
/// ASCII digits only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArabicDetector;

impl ScriptDetector for ArabicDetector {
    fn matches(&self, text: &str) -> bool {
        let text = text.trim();
        text.chars().count() > MIN_ARABIC_LEN && contains_arabic(text) && !is_ascii_digits(text)
    }

    fn script_name(&self) -> &'static str {
        "Arabic"
    }
}

/// Latin/English detector used by single-file detection.
///
/// The whole string must match `[A-Za-z0-9.,!?()":;'\-\s]+`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishDetector;

impl ScriptDetector for EnglishDetector {
    fn matches(&self, text: &str) -> bool {
        ENGLISH_TEXT_REGEX.is_match(text)
    }

    fn script_name(&self) -> &'static str {
        "English"
    }
}

#[enum_dispatch(ScriptDetector)]
#[derive(Debug, Clone, Copy)]
pub enum Detector {
    Arabic(ArabicDetector),
    English(EnglishDetector),
}

/// Which entry point drives the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Directory scan: markup text and embedded string expressions, Arabic
    /// detector, trimmed values.
    Arabic,
    /// Single-file detection: every string literal, English detector, raw
    /// values.
    English,
}

impl ScanMode {
    pub fn detector(self) -> Detector {
        match self {
            ScanMode::Arabic => ArabicDetector.into(),
            ScanMode::English => EnglishDetector.into(),
        }
    }
}
