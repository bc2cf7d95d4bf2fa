//! Compatibility Jamo rendering of syllable components
//!
//! The tables are indexed by the values produced by the syllable arithmetic in
//! [`crate::decompose::Syllable`]. Their lengths are fixed by the Unicode
//! Hangul Syllables layout: 19 leading consonants, 21 vowels and 28 trailing
//! positions (position 0 meaning "no trailing consonant").

/// First precomposed syllable (가)
pub const SYLLABLE_BASE: u32 = 0xAC00;

/// Last precomposed syllable (힣)
pub const SYLLABLE_LAST: u32 = 0xD7A3;

/// Number of leading consonants
pub const LEADING_COUNT: u32 = 19;

/// Number of vowels
pub const VOWEL_COUNT: u32 = 21;

/// Number of trailing positions, including "none"
pub const TRAILING_COUNT: u32 = 28;

/// Syllables sharing one leading consonant (588)
pub const VOWEL_TRAILING_COUNT: u32 = VOWEL_COUNT * TRAILING_COUNT;

/// Total number of precomposed syllables (11172)
pub const SYLLABLE_COUNT: u32 = LEADING_COUNT * VOWEL_TRAILING_COUNT;

/// Leading consonants as compatibility Jamo
pub const LEADING: [char; LEADING_COUNT as usize] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ',
    'ㅍ', 'ㅎ',
];

/// Vowels as compatibility Jamo
pub const VOWELS: [char; VOWEL_COUNT as usize] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ',
    'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Trailing consonants and clusters as compatibility Jamo
///
/// Index 0 is `None`: the syllable has no trailing consonant.
pub const TRAILING: [Option<char>; TRAILING_COUNT as usize] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];
