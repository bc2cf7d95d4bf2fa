//! Arithmetic decomposition of precomposed syllables

use smallvec::SmallVec;

use crate::script::is_hangul_syllable;
use crate::tables::jamo::{
    LEADING, LEADING_COUNT, SYLLABLE_BASE, TRAILING, TRAILING_COUNT, VOWELS,
    VOWEL_TRAILING_COUNT,
};

/// Component indices of one precomposed syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Syllable {
    leading: u32,
    vowel: u32,
    trailing: u32,
}

impl Syllable {
    /// Decompose a syllable index (codepoint minus U+AC00)
    ///
    /// Returns `None` when the leading index falls outside the leading table.
    /// This cannot happen for indices derived from the syllable block; the
    /// check keeps table indexing in bounds if the block constants ever drift.
    pub fn from_index(index: u32) -> Option<Self> {
        let leading = index / VOWEL_TRAILING_COUNT;
        if leading >= LEADING_COUNT {
            return None;
        }

        Some(Self {
            leading,
            vowel: (index % VOWEL_TRAILING_COUNT) / TRAILING_COUNT,
            trailing: index % TRAILING_COUNT,
        })
    }

    /// Leading consonant index (0..19)
    pub fn leading_index(&self) -> u32 {
        self.leading
    }

    /// Vowel index (0..21)
    pub fn vowel_index(&self) -> u32 {
        self.vowel
    }

    /// Trailing consonant index (0..28, 0 = none)
    pub fn trailing_index(&self) -> u32 {
        self.trailing
    }

    pub fn leading(&self) -> char {
        LEADING[self.leading as usize]
    }

    pub fn vowel(&self) -> char {
        VOWELS[self.vowel as usize]
    }

    pub fn trailing(&self) -> Option<char> {
        TRAILING[self.trailing as usize]
    }

    /// Compatibility Jamo letters of the syllable, in reading order
    pub fn letters(&self) -> SmallVec<[char; 3]> {
        let mut letters = SmallVec::new();
        letters.push(self.leading());
        letters.push(self.vowel());
        if let Some(trailing) = self.trailing() {
            letters.push(trailing);
        }
        letters
    }
}

/// Decompose a precomposed syllable character
///
/// Returns `None` for characters outside the Hangul Syllables block.
pub fn decompose_syllable(ch: char) -> Option<Syllable> {
    if !is_hangul_syllable(ch) {
        return None;
    }
    Syllable::from_index(ch as u32 - SYLLABLE_BASE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::jamo::SYLLABLE_COUNT;

    #[test]
    fn test_decompose_first_and_last() {
        let ga = decompose_syllable('가').unwrap();
        assert_eq!(
            (ga.leading_index(), ga.vowel_index(), ga.trailing_index()),
            (0, 0, 0)
        );
        assert_eq!(ga.letters().as_slice(), &['ㄱ', 'ㅏ']);

        let hih = decompose_syllable('힣').unwrap();
        assert_eq!(
            (hih.leading_index(), hih.vowel_index(), hih.trailing_index()),
            (18, 20, 27)
        );
        assert_eq!(hih.letters().as_slice(), &['ㅎ', 'ㅣ', 'ㅎ']);
    }

    #[test]
    fn test_decompose_with_trailing() {
        let han = decompose_syllable('한').unwrap();
        assert_eq!(han.leading(), 'ㅎ');
        assert_eq!(han.vowel(), 'ㅏ');
        assert_eq!(han.trailing(), Some('ㄴ'));
    }

    #[test]
    fn test_decompose_compound_components() {
        let gwaen = decompose_syllable('괜').unwrap();
        assert_eq!(gwaen.letters().as_slice(), &['ㄱ', 'ㅙ', 'ㄴ']);

        let gap = decompose_syllable('값').unwrap();
        assert_eq!(gap.letters().as_slice(), &['ㄱ', 'ㅏ', 'ㅄ']);
    }

    #[test]
    fn test_non_syllables() {
        assert_eq!(decompose_syllable('ㄱ'), None);
        assert_eq!(decompose_syllable('A'), None);
        assert_eq!(decompose_syllable('\u{D7A4}'), None);
    }

    #[test]
    fn test_out_of_range_index() {
        assert!(Syllable::from_index(SYLLABLE_COUNT - 1).is_some());
        assert_eq!(Syllable::from_index(SYLLABLE_COUNT), None);
        assert_eq!(Syllable::from_index(u32::MAX), None);
    }

    #[test]
    fn test_every_syllable_has_two_or_three_letters() {
        for index in 0..SYLLABLE_COUNT {
            let syllable = Syllable::from_index(index).unwrap();
            let letters = syllable.letters();
            let expected = if index % TRAILING_COUNT == 0 { 2 } else { 3 };
            assert_eq!(letters.len(), expected, "syllable index {index}");
            assert!(!letters.spilled());
        }
    }
}
