//! Intermediate output units

use crate::script::is_space;

/// One item of intermediate output during a single split call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    /// A compatibility Jamo letter produced by decomposition
    Letter(char),
    /// Whitespace copied from the input
    Whitespace(char),
    /// Any other character copied from the input
    Other(char),
}

impl Unit {
    /// Wrap an input character that is not decomposed
    pub(crate) fn passthrough(ch: char) -> Self {
        if is_space(ch) {
            Unit::Whitespace(ch)
        } else {
            Unit::Other(ch)
        }
    }

    pub(crate) fn ch(&self) -> char {
        match self {
            Unit::Letter(ch) | Unit::Whitespace(ch) | Unit::Other(ch) => *ch,
        }
    }

    pub(crate) fn is_whitespace(&self) -> bool {
        matches!(self, Unit::Whitespace(_))
    }

    pub(crate) fn is_hangul_letter(&self) -> bool {
        matches!(self, Unit::Letter(_))
    }
}
