//! Options controlling how text is split and filtered

use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Expand compound letters into atomic letters
    pub const SPLIT_COMPLEX_LETTERS: bool = true;

    /// Separate adjacent letters with a space
    pub const INSERT_SPACES_BETWEEN_LETTERS: bool = false;

    /// Filter out non-Hangul characters before splitting
    pub const FILTER_ENABLED: bool = false;

    /// Keep whitespace when filtering
    pub const INCLUDE_WHITESPACE: bool = true;
}

/// Options for [`crate::split_hangul_blocks`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitOptions {
    /// Expand double consonants, complex vowels and final clusters
    pub split_complex_letters: bool,
    /// Insert a single space between adjacent Hangul letters
    pub insert_spaces_between_letters: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            split_complex_letters: defaults::SPLIT_COMPLEX_LETTERS,
            insert_spaces_between_letters: defaults::INSERT_SPACES_BETWEEN_LETTERS,
        }
    }
}

impl SplitOptions {
    /// Create options with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether compound letters are expanded
    pub fn with_split_complex_letters(mut self, enabled: bool) -> Self {
        self.split_complex_letters = enabled;
        self
    }

    /// Set whether spaces are inserted between letters
    pub fn with_insert_spaces_between_letters(mut self, enabled: bool) -> Self {
        self.insert_spaces_between_letters = enabled;
        self
    }
}

/// Options for the keep-only-Hangul filtering step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterOptions {
    /// Run the filter before splitting
    pub enabled: bool,
    /// Keep whitespace characters
    pub include_whitespace: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            enabled: defaults::FILTER_ENABLED,
            include_whitespace: defaults::INCLUDE_WHITESPACE,
        }
    }
}

impl FilterOptions {
    /// Apply the filter if enabled, otherwise return the text unchanged
    pub fn apply(&self, text: &str) -> String {
        if self.enabled {
            crate::script::keep_only_hangul(text, self.include_whitespace)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_options_defaults() {
        let options = SplitOptions::default();
        assert!(options.split_complex_letters);
        assert!(!options.insert_spaces_between_letters);
        assert_eq!(SplitOptions::new(), options);
    }

    #[test]
    fn test_split_options_overrides_are_independent() {
        let options = SplitOptions::new().with_insert_spaces_between_letters(true);
        assert!(options.split_complex_letters);
        assert!(options.insert_spaces_between_letters);

        let options = SplitOptions::new().with_split_complex_letters(false);
        assert!(!options.split_complex_letters);
        assert!(!options.insert_spaces_between_letters);
    }

    #[test]
    fn test_filter_options_defaults() {
        let filter = FilterOptions::default();
        assert!(!filter.enabled);
        assert!(filter.include_whitespace);
    }

    #[test]
    fn test_filter_apply() {
        let disabled = FilterOptions::default();
        assert_eq!(disabled.apply("abc 한글"), "abc 한글");

        let enabled = FilterOptions {
            enabled: true,
            include_whitespace: false,
        };
        assert_eq!(enabled.apply("a한 b글"), "한글");
    }
}
