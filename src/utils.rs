//! Common utility functions shared across the codebase.

use std::ops::RangeInclusive;

/// Unicode blocks treated as Arabic script: Arabic, Arabic Supplement and
/// Arabic Extended-A.
pub const ARABIC_RANGES: [RangeInclusive<char>; 3] = [
    '\u{0600}'..='\u{06FF}',
    '\u{0750}'..='\u{077F}',
    '\u{08A0}'..='\u{08FF}',
];

/// Checks if the text contains at least one Arabic-script code point.
///
/// # Examples
///
/// ```
/// use textscout::utils::contains_arabic;
///
/// assert!(contains_arabic("مرحبا"));
/// assert!(contains_arabic("Hello مرحبا"));
/// assert!(!contains_arabic("Hello"));
/// assert!(!contains_arabic(""));
/// ```
pub fn contains_arabic(text: &str) -> bool {
    text.chars()
        .any(|c| ARABIC_RANGES.iter().any(|range| range.contains(&c)))
}

/// Checks if the text is made of ASCII decimal digits only.
///
/// Returns false for the empty string.
pub fn is_ascii_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
