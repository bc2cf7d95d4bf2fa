//! Script classification for Hangul text
//!
//! Pure predicates over single characters plus the keep-only-Hangul filter.

use crate::tables::jamo::{SYLLABLE_BASE, SYLLABLE_LAST};
use crate::tables::HANGUL_RANGES;

pub use crate::tables::ranges::HangulBlock;

/// Check if a character is a precomposed Hangul syllable (U+AC00..U+D7A3)
#[inline]
pub fn is_hangul_syllable(ch: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(ch as u32))
}

/// Check if a character belongs to any Hangul-related Unicode block
#[inline]
pub fn is_hangul_script_char(ch: char) -> bool {
    let scalar = ch as u32;
    HANGUL_RANGES.iter().any(|(_, range)| range.contains(&scalar))
}

/// Check if a character counts as whitespace for filtering and spacing
///
/// Unicode `White_Space` plus the information separators U+001C..U+001F,
/// which separate text the same way line breaks do.
#[inline]
pub fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&ch)
}

/// Keep only Hangul characters, and whitespace when `include_whitespace` is set
///
/// Order and multiplicity of the retained characters are preserved; dropped
/// characters leave no marker behind.
pub fn keep_only_hangul(text: &str, include_whitespace: bool) -> String {
    text.chars()
        .filter(|&ch| is_hangul_script_char(ch) || (include_whitespace && is_space(ch)))
        .collect()
}

/// [`keep_only_hangul`] with whitespace retained
pub fn keep_only_hangul_default(text: &str) -> String {
    keep_only_hangul(text, true)
}

/// Check if the text contains at least one Hangul character
pub fn has_hangul_content(text: &str) -> bool {
    text.chars().any(is_hangul_script_char)
}
