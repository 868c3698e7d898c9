//! Candidate letter alphabet
//!
//! The alphabet is the ordered sequence of letters the combination search draws
//! from. Its order fixes the order candidates are generated in.

use rustc_hash::FxHashSet;
use std::fmt;

/// Ordered sequence of distinct candidate letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

/// Error type for invalid alphabets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// The range start comes after its end
    InvalidRange { start: char, end: char },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { start, end } => {
                write!(f, "Range start '{start}' comes after range end '{end}'")
            }
        }
    }
}

impl std::error::Error for AlphabetError {}

impl Alphabet {
    /// Create the contiguous code-point range `start..=end`
    ///
    /// # Errors
    /// Returns `AlphabetError::InvalidRange` if `start > end`.
    ///
    /// # Examples
    /// ```
    /// use letter_tree::core::Alphabet;
    ///
    /// let alphabet = Alphabet::from_range('a', 'z').unwrap();
    /// assert_eq!(alphabet.len(), 26);
    ///
    /// assert!(Alphabet::from_range('z', 'a').is_err());
    /// ```
    pub fn from_range(start: char, end: char) -> Result<Self, AlphabetError> {
        if start > end {
            return Err(AlphabetError::InvalidRange { start, end });
        }

        Ok(Self {
            letters: (start..=end).collect(),
        })
    }

    /// Create an alphabet from an explicit letter sequence
    ///
    /// Repeated letters are dropped silently, keeping the first occurrence.
    pub fn from_letters<I: IntoIterator<Item = char>>(letters: I) -> Self {
        let mut seen = FxHashSet::default();
        let letters = letters
            .into_iter()
            .filter(|letter| seen.insert(*letter))
            .collect();

        Self { letters }
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.letters.first(), self.letters.last()) {
            (Some(first), Some(last)) => write!(f, "{first}..{last} ({} letters)", self.len()),
            _ => write!(f, "(empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_inclusive() {
        let alphabet = Alphabet::from_range('a', 'e').unwrap();
        assert_eq!(alphabet.letters(), &['a', 'b', 'c', 'd', 'e']);
    }

    #[test]
    fn single_letter_range() {
        let alphabet = Alphabet::from_range('q', 'q').unwrap();
        assert_eq!(alphabet.letters(), &['q']);
    }

    #[test]
    fn reversed_range_rejected() {
        assert_eq!(
            Alphabet::from_range('z', 'a'),
            Err(AlphabetError::InvalidRange {
                start: 'z',
                end: 'a'
            })
        );
    }

    #[test]
    fn from_letters_drops_duplicates() {
        let alphabet = Alphabet::from_letters("abcab".chars());
        assert_eq!(alphabet.letters(), &['a', 'b', 'c']);
    }

    #[test]
    fn from_letters_keeps_given_order() {
        let alphabet = Alphabet::from_letters(['z', 'a', 'm']);
        assert_eq!(alphabet.letters(), &['z', 'a', 'm']);
    }

    #[test]
    fn empty_alphabet() {
        let alphabet = Alphabet::from_letters(std::iter::empty());
        assert!(alphabet.is_empty());
        assert_eq!(alphabet.to_string(), "(empty)");
    }

    #[test]
    fn display_summarises_range() {
        let alphabet = Alphabet::from_range('a', 'z').unwrap();
        assert_eq!(alphabet.to_string(), "a..z (26 letters)");
    }
}
