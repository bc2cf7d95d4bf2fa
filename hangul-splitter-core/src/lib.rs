//! Hangul syllable block splitting
//!
//! This crate decomposes precomposed Hangul syllables into compatibility Jamo
//! letters. Compound letters (double consonants, complex vowels and final
//! consonant clusters) can be expanded further into atomic letters, and
//! adjacent letters can be separated by spaces for readability or speech
//! output.
//!
//! # Architecture
//!
//! - **Script classifier** ([`script`]): predicates over the Hangul Unicode
//!   blocks and the keep-only-Hangul filter
//! - **Tables** ([`tables`]): compatibility Jamo tables and the compound
//!   letter expansion map
//! - **Block decomposer** ([`decompose`]): syllable arithmetic, compound
//!   expansion and rendering
//! - **Configuration** ([`config`]): TOML schema for persisted options
//!
//! # Example
//!
//! ```rust
//! use hangul_splitter_core::{keep_only_hangul, split_hangul_blocks, SplitOptions};
//!
//! let options = SplitOptions::default().with_insert_spaces_between_letters(true);
//! assert_eq!(split_hangul_blocks("한글", options), "ㅎ ㅏ ㄴ ㄱ ㅡ ㄹ");
//!
//! assert_eq!(keep_only_hangul("abc한글!? 123", true), "한글 ");
//! ```

pub mod config;
pub mod decompose;
pub mod error;
pub mod options;
pub mod script;
pub mod tables;

pub use config::SplitterConfig;
pub use decompose::{decompose_syllable, split_hangul_blocks, Syllable};
pub use error::{Error, Result};
pub use options::{FilterOptions, SplitOptions};
pub use script::{
    has_hangul_content, is_hangul_script_char, is_hangul_syllable, is_space, keep_only_hangul,
    keep_only_hangul_default, HangulBlock,
};
pub use tables::expand_compound;
