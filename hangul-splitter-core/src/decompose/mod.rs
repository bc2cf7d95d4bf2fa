//! Block decomposer
//!
//! Splitting runs in three passes over a per-call unit sequence:
//!
//! 1. `decompose_units` turns every precomposed syllable into its leading,
//!    vowel and optional trailing letters and copies everything else.
//! 2. `expand_compounds` replaces compound letters with their atomic parts
//!    (only when [`SplitOptions::split_complex_letters`] is set).
//! 3. `render_units` joins the units, optionally spacing adjacent letters.

mod syllable;
mod unit;

pub use syllable::{decompose_syllable, Syllable};

pub(crate) use unit::Unit;

use crate::options::SplitOptions;
use crate::script::is_hangul_syllable;
use crate::tables::expand_compound;
use crate::tables::jamo::SYLLABLE_BASE;

/// Split Hangul syllable blocks into compatibility Jamo letters
///
/// Characters that are not precomposed syllables are copied unchanged. The
/// function never fails.
///
/// # Example
///
/// ```rust
/// use hangul_splitter_core::{split_hangul_blocks, SplitOptions};
///
/// assert_eq!(split_hangul_blocks("값", SplitOptions::default()), "ㄱㅏㅂㅅ");
///
/// let options = SplitOptions::default().with_split_complex_letters(false);
/// assert_eq!(split_hangul_blocks("값", options), "ㄱㅏㅄ");
/// ```
pub fn split_hangul_blocks(text: &str, options: SplitOptions) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut units = decompose_units(text);
    if options.split_complex_letters {
        units = expand_compounds(units);
    }

    render_units(&units, options.insert_spaces_between_letters)
}

/// Phase 1: decompose syllables into letter units
pub(crate) fn decompose_units(text: &str) -> Vec<Unit> {
    let mut units = Vec::with_capacity(text.len());

    for ch in text.chars() {
        if !is_hangul_syllable(ch) {
            units.push(Unit::passthrough(ch));
            continue;
        }

        push_syllable(&mut units, ch, ch as u32 - SYLLABLE_BASE);
    }

    units
}

/// Push the letters of the syllable at `index`, or copy `ch` if the index
/// does not map onto the leading table
fn push_syllable(units: &mut Vec<Unit>, ch: char, index: u32) {
    match Syllable::from_index(index) {
        Some(syllable) => {
            units.push(Unit::Letter(syllable.leading()));
            units.push(Unit::Letter(syllable.vowel()));
            if let Some(trailing) = syllable.trailing() {
                units.push(Unit::Letter(trailing));
            }
        }
        None => {
            log::warn!(
                "Leading consonant index out of range for U+{:04X}; copying unchanged",
                ch as u32
            );
            units.push(Unit::passthrough(ch));
        }
    }
}

/// Phase 2: replace compound letters with their atomic components
pub(crate) fn expand_compounds(units: Vec<Unit>) -> Vec<Unit> {
    let mut expanded = Vec::with_capacity(units.len() * 2);

    for unit in units {
        match unit {
            Unit::Letter(letter) => match expand_compound(letter) {
                Some(parts) => expanded.extend(parts.map(Unit::Letter)),
                None => expanded.push(unit),
            },
            _ => expanded.push(unit),
        }
    }

    expanded
}

/// Phase 3: join units into the output string
///
/// With `insert_spaces` set, a single space goes between two consecutive
/// letter units. Whitespace and other characters break adjacency.
pub(crate) fn render_units(units: &[Unit], insert_spaces: bool) -> String {
    if !insert_spaces {
        return units.iter().map(Unit::ch).collect();
    }

    let mut output = String::with_capacity(units.len() * 2);
    let mut after_hangul_letter = false;

    for unit in units {
        if unit.is_whitespace() {
            output.push(unit.ch());
            after_hangul_letter = false;
            continue;
        }

        if after_hangul_letter && unit.is_hangul_letter() {
            output.push(' ');
        }
        output.push(unit.ch());
        after_hangul_letter = unit.is_hangul_letter();
    }

    output
}
