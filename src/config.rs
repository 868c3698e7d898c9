//! Pipeline configuration
//!
//! Every option has a default matching the conventional invocation. Validation
//! runs before any file is touched and names the offending option.

use crate::core::{Alphabet, AlphabetError};
use std::fmt;
use std::path::PathBuf;

/// Default word list path
pub const DEFAULT_WORD_LIST: &str = "wordlist.txt";
/// Default tree artifact path
pub const DEFAULT_OUTPUT: &str = "letter_tree.json";
/// Default support threshold, as a fraction of the corpus
pub const DEFAULT_THRESHOLD: f64 = 0.025;
pub const DEFAULT_CHAR_START: char = 'a';
pub const DEFAULT_CHAR_END: char = 'z';
pub const DEFAULT_MAX_SET_SIZE: usize = 4;

/// Error type for invalid configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Threshold is NaN, infinite, or outside 0.0..=1.0
    InvalidThreshold(f64),
    /// Alphabet range start comes after its end
    InvalidRange { start: char, end: char },
    /// Alphabet endpoint is uppercase and can never match case-folded words
    UppercaseLetter { option: &'static str, letter: char },
    /// Maximum set size of zero
    ZeroMaxSetSize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThreshold(value) => {
                write!(f, "threshold must be between 0.0 and 1.0, got {value}")
            }
            Self::InvalidRange { start, end } => write!(
                f,
                "char-start '{start}' must not come after char-end '{end}'"
            ),
            Self::UppercaseLetter { option, letter } => write!(
                f,
                "{option} '{letter}' is uppercase, but words are folded to lowercase"
            ),
            Self::ZeroMaxSetSize => write!(f, "max-set-size must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<AlphabetError> for ConfigError {
    fn from(e: AlphabetError) -> Self {
        match e {
            AlphabetError::InvalidRange { start, end } => Self::InvalidRange { start, end },
        }
    }
}

/// Configuration for one generate run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateConfig {
    pub word_list_path: PathBuf,
    pub output_path: PathBuf,
    /// Minimum fraction of words that must contain a letter set
    pub threshold: f64,
    pub char_start: char,
    pub char_end: char,
    pub max_set_size: usize,
    /// Keep only sets of exactly `max_set_size` letters
    pub purge_incomplete: bool,
    /// Show progress bars and status lines
    pub show_progress: bool,
    /// Print every qualifying set as it is found
    pub list_sets: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            word_list_path: PathBuf::from(DEFAULT_WORD_LIST),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            threshold: DEFAULT_THRESHOLD,
            char_start: DEFAULT_CHAR_START,
            char_end: DEFAULT_CHAR_END,
            max_set_size: DEFAULT_MAX_SET_SIZE,
            purge_incomplete: true,
            show_progress: true,
            list_sets: false,
        }
    }
}

impl GenerateConfig {
    /// Check every option
    ///
    /// # Errors
    /// Returns the first invalid option found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }

        for (option, letter) in [("char-start", self.char_start), ("char-end", self.char_end)] {
            if letter.is_uppercase() {
                return Err(ConfigError::UppercaseLetter { option, letter });
            }
        }

        if self.char_start > self.char_end {
            return Err(ConfigError::InvalidRange {
                start: self.char_start,
                end: self.char_end,
            });
        }

        if self.max_set_size == 0 {
            return Err(ConfigError::ZeroMaxSetSize);
        }

        Ok(())
    }

    /// The searched alphabet, `char_start..=char_end`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidRange` if the range is reversed.
    pub fn alphabet(&self) -> Result<Alphabet, ConfigError> {
        Ok(Alphabet::from_range(self.char_start, self.char_end)?)
    }

    /// Minimum support for a corpus of `total_words` words
    #[must_use]
    pub fn min_valid_words(&self, total_words: usize) -> usize {
        min_valid_words(total_words, self.threshold)
    }
}

/// `floor(threshold × total_words)`
///
/// # Examples
/// ```
/// use letter_tree::config::min_valid_words;
///
/// assert_eq!(min_valid_words(1000, 0.025), 25);
/// assert_eq!(min_valid_words(3, 1.0), 3);
/// assert_eq!(min_valid_words(39, 0.025), 0);
/// ```
#[must_use]
pub fn min_valid_words(total_words: usize, threshold: f64) -> usize {
    (total_words as f64 * threshold).floor() as usize
}
