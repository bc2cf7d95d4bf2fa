//! Static lookup tables
//!
//! All tables are process-wide constants; nothing here is mutated after
//! initialization.

pub mod compound;
pub mod jamo;
pub mod ranges;

pub use compound::{expand_compound, is_compound_letter, COMPOUND_LETTERS};
pub use jamo::{LEADING, TRAILING, VOWELS};
pub use ranges::HANGUL_RANGES;
