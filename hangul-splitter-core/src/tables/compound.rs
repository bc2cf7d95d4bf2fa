//! Compound letter expansion
//!
//! Maps a compound compatibility Jamo to the two atomic letters it stands for.
//! Every expansion is already atomic, so a single lookup is enough.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Compound letters and their atomic components
pub const COMPOUND_LETTERS: [(char, [char; 2]); 23] = [
    // Double consonants
    ('ㄲ', ['ㄱ', 'ㄱ']),
    ('ㄸ', ['ㄷ', 'ㄷ']),
    ('ㅃ', ['ㅂ', 'ㅂ']),
    ('ㅆ', ['ㅅ', 'ㅅ']),
    ('ㅉ', ['ㅈ', 'ㅈ']),
    // Complex vowels
    ('ㅘ', ['ㅗ', 'ㅏ']),
    ('ㅙ', ['ㅗ', 'ㅐ']),
    ('ㅚ', ['ㅗ', 'ㅣ']),
    ('ㅝ', ['ㅜ', 'ㅓ']),
    ('ㅞ', ['ㅜ', 'ㅔ']),
    ('ㅟ', ['ㅜ', 'ㅣ']),
    ('ㅢ', ['ㅡ', 'ㅣ']),
    // Final consonant clusters
    ('ㄳ', ['ㄱ', 'ㅅ']),
    ('ㄵ', ['ㄴ', 'ㅈ']),
    ('ㄶ', ['ㄴ', 'ㅎ']),
    ('ㄺ', ['ㄹ', 'ㄱ']),
    ('ㄻ', ['ㄹ', 'ㅁ']),
    ('ㄼ', ['ㄹ', 'ㅂ']),
    ('ㄽ', ['ㄹ', 'ㅅ']),
    ('ㄾ', ['ㄹ', 'ㅌ']),
    ('ㄿ', ['ㄹ', 'ㅍ']),
    ('ㅀ', ['ㄹ', 'ㅎ']),
    ('ㅄ', ['ㅂ', 'ㅅ']),
];

static COMPOUND_INDEX: OnceLock<HashMap<char, [char; 2]>> = OnceLock::new();

/// Look up the atomic components of a compound letter
///
/// Returns `None` for letters that are already atomic and for any character
/// that is not a compatibility Jamo.
pub fn expand_compound(letter: char) -> Option<[char; 2]> {
    COMPOUND_INDEX
        .get_or_init(|| COMPOUND_LETTERS.iter().copied().collect())
        .get(&letter)
        .copied()
}

/// Check whether a letter is a compound letter
#[inline]
pub fn is_compound_letter(letter: char) -> bool {
    expand_compound(letter).is_some()
}
