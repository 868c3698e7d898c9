//! Word corpus
//!
//! The corpus keeps one letter set per loaded word, in load order.

use super::LetterSet;

/// Ordered collection of per-word letter sets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    entries: Vec<LetterSet>,
}

impl Corpus {
    #[must_use]
    pub const fn new(entries: Vec<LetterSet>) -> Self {
        Self { entries }
    }

    /// Build a corpus from raw words, skipping blank ones
    ///
    /// Words are trimmed before the blank check.
    ///
    /// # Examples
    /// ```
    /// use letter_tree::core::Corpus;
    ///
    /// let corpus = Corpus::from_words(["cat", "  ", "Car"]);
    /// assert_eq!(corpus.len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = words
            .into_iter()
            .filter_map(|word| {
                let trimmed = word.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(LetterSet::from_word(trimmed))
                }
            })
            .collect();

        Self { entries }
    }

    /// Total word count, the denominator of the support threshold
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, LetterSet> {
        self.entries.iter()
    }

    /// Number of words whose letter set is a superset of `candidate`
    #[must_use]
    pub fn support(&self, candidate: &LetterSet) -> usize {
        self.entries
            .iter()
            .filter(|word| candidate.is_subset_of(word))
            .count()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a LetterSet;
    type IntoIter = std::slice::Iter<'a, LetterSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
