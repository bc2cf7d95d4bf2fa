//! Hangul-related Unicode blocks

use std::fmt;
use std::ops::RangeInclusive;

/// Unicode blocks that hold Hangul characters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HangulBlock {
    /// Conjoining Jamo (U+1100..U+11FF)
    Jamo,
    /// Standalone letters used for display and typing (U+3130..U+318F)
    CompatibilityJamo,
    /// Archaic leading consonants (U+A960..U+A97F)
    JamoExtendedA,
    /// Precomposed syllable blocks (U+AC00..U+D7A3)
    Syllables,
    /// Archaic vowels and trailing consonants (U+D7B0..U+D7FF)
    JamoExtendedB,
}

/// All Hangul blocks in codepoint order, indexed by `HangulBlock` discriminant
pub const HANGUL_RANGES: [(HangulBlock, RangeInclusive<u32>); 5] = [
    (HangulBlock::Jamo, 0x1100..=0x11FF),
    (HangulBlock::CompatibilityJamo, 0x3130..=0x318F),
    (HangulBlock::JamoExtendedA, 0xA960..=0xA97F),
    (HangulBlock::Syllables, 0xAC00..=0xD7A3),
    (HangulBlock::JamoExtendedB, 0xD7B0..=0xD7FF),
];

impl HangulBlock {
    /// Find the Hangul block a character belongs to
    pub fn of(ch: char) -> Option<Self> {
        let scalar = ch as u32;
        HANGUL_RANGES
            .iter()
            .find(|(_, range)| range.contains(&scalar))
            .map(|(block, _)| *block)
    }

    /// Inclusive codepoint range of the block
    pub fn range(&self) -> RangeInclusive<u32> {
        HANGUL_RANGES[*self as usize].1.clone()
    }

    /// Unicode block name
    pub fn name(&self) -> &'static str {
        match self {
            HangulBlock::Jamo => "Hangul Jamo",
            HangulBlock::CompatibilityJamo => "Hangul Compatibility Jamo",
            HangulBlock::JamoExtendedA => "Hangul Jamo Extended-A",
            HangulBlock::Syllables => "Hangul Syllables",
            HangulBlock::JamoExtendedB => "Hangul Jamo Extended-B",
        }
    }

    /// Iterate over every block in codepoint order
    pub fn all() -> impl Iterator<Item = HangulBlock> {
        HANGUL_RANGES.into_iter().map(|(block, _)| block)
    }
}

impl fmt::Display for HangulBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
