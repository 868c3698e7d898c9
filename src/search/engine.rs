//! Exhaustive combination search
//!
//! Tests every candidate of every size from 1 to the maximum against the whole
//! corpus. There is no pruning across sizes: a failing set does not rule out
//! its supersets, every candidate is tested independently.

use super::candidates::{candidates_of_size, combination_count};
use crate::core::{Alphabet, Corpus, LetterSet};

/// A letter set that met the support threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifyingSet {
    pub letters: LetterSet,
    /// Number of corpus words containing every letter of the set
    pub support: usize,
}

impl QualifyingSet {
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

/// Progress notifications emitted while the search runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent<'a> {
    /// Testing of all `candidates` combinations of `size` letters begins
    SizeStarted { size: usize, candidates: u64 },
    /// One candidate was tested
    CandidateTested {
        candidate: &'a LetterSet,
        support: usize,
        qualified: bool,
    },
    /// All candidates of `size` letters were tested
    SizeFinished { size: usize, qualified: usize },
}

/// Combination search over a borrowed corpus and alphabet
pub struct CombinationSearch<'a> {
    corpus: &'a Corpus,
    alphabet: &'a Alphabet,
    min_valid_words: usize,
    max_set_size: usize,
}

impl<'a> CombinationSearch<'a> {
    /// Create a new search
    ///
    /// # Parameters
    /// - `corpus`: Per-word letter sets to test against
    /// - `alphabet`: Candidate letters, in generation order
    /// - `min_valid_words`: Minimum support for a candidate to qualify
    /// - `max_set_size`: Largest candidate size tested
    #[must_use]
    pub const fn new(
        corpus: &'a Corpus,
        alphabet: &'a Alphabet,
        min_valid_words: usize,
        max_set_size: usize,
    ) -> Self {
        Self {
            corpus,
            alphabet,
            min_valid_words,
            max_set_size,
        }
    }

    #[inline]
    #[must_use]
    pub const fn min_valid_words(&self) -> usize {
        self.min_valid_words
    }

    #[inline]
    #[must_use]
    pub const fn max_set_size(&self) -> usize {
        self.max_set_size
    }

    /// Largest size actually searched
    ///
    /// Sizes beyond the alphabet length have no combinations, so they are
    /// skipped outright.
    #[inline]
    #[must_use]
    pub fn searched_max_size(&self) -> usize {
        self.max_set_size.min(self.alphabet.len())
    }

    /// Run the search to completion
    ///
    /// Results come in generation order: size ascending, then the
    /// lexicographic order of the alphabet sequence.
    ///
    /// # Examples
    /// ```
    /// use letter_tree::core::{Alphabet, Corpus};
    /// use letter_tree::search::CombinationSearch;
    ///
    /// let corpus = Corpus::from_words(["cat", "car", "can"]);
    /// let alphabet = Alphabet::from_range('a', 'z').unwrap();
    ///
    /// let found = CombinationSearch::new(&corpus, &alphabet, 3, 2).run();
    /// let names: Vec<String> = found.iter().map(|s| s.letters.to_string()).collect();
    /// assert_eq!(names, vec!["a", "c", "ac"]);
    /// ```
    #[must_use]
    pub fn run(&self) -> Vec<QualifyingSet> {
        self.run_with(|_| {})
    }

    /// Run the search, reporting progress to `observer`
    pub fn run_with<F>(&self, mut observer: F) -> Vec<QualifyingSet>
    where
        F: FnMut(SearchEvent<'_>),
    {
        let mut qualifying = Vec::new();

        for size in 1..=self.searched_max_size() {
            observer(SearchEvent::SizeStarted {
                size,
                candidates: combination_count(self.alphabet.len(), size),
            });

            let before = qualifying.len();
            for candidate in candidates_of_size(self.alphabet, size) {
                let support = self.corpus.support(&candidate);
                let qualified = support >= self.min_valid_words;

                observer(SearchEvent::CandidateTested {
                    candidate: &candidate,
                    support,
                    qualified,
                });

                if qualified {
                    qualifying.push(QualifyingSet {
                        letters: candidate,
                        support,
                    });
                }
            }

            observer(SearchEvent::SizeFinished {
                size,
                qualified: qualifying.len() - before,
            });
        }

        qualifying
    }

    /// Test only the candidates of a single size
    #[must_use]
    pub fn run_size(&self, size: usize) -> Vec<QualifyingSet> {
        candidates_of_size(self.alphabet, size)
            .filter_map(|candidate| {
                let support = self.corpus.support(&candidate);
                (support >= self.min_valid_words).then_some(QualifyingSet {
                    letters: candidate,
                    support,
                })
            })
            .collect()
    }
}
