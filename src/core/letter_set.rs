//! Letter set representation
//!
//! A `LetterSet` stores distinct letters in ascending order. The sorted form is
//! both the canonical identity of the set and the path it takes through the tree.

use std::fmt;

/// An unordered set of distinct letters, stored sorted ascending
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterSet(Vec<char>);

impl LetterSet {
    /// Build a set from any sequence of letters
    ///
    /// Order is irrelevant and repeated letters collapse.
    ///
    /// # Examples
    /// ```
    /// use letter_tree::core::LetterSet;
    ///
    /// let set = LetterSet::from_letters(['c', 'a', 'c']);
    /// assert_eq!(set.letters(), &['a', 'c']);
    /// ```
    pub fn from_letters<I: IntoIterator<Item = char>>(letters: I) -> Self {
        let mut letters: Vec<char> = letters.into_iter().collect();
        letters.sort_unstable();
        letters.dedup();
        Self(letters)
    }

    /// Build the letter set of a single word, case-folded to lowercase
    ///
    /// Every character of the word contributes, including ones outside any
    /// alphabet later searched.
    ///
    /// # Examples
    /// ```
    /// use letter_tree::core::LetterSet;
    ///
    /// let set = LetterSet::from_word("Banana");
    /// assert_eq!(set.to_string(), "abn");
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        Self::from_letters(word.to_lowercase().chars())
    }

    /// The letters in ascending order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.0.binary_search(&letter).is_ok()
    }

    /// Check whether every letter of `self` also appears in `other`
    ///
    /// Both sides are sorted, so this is a single merge walk.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }

        let mut theirs = other.0.iter();
        self.0
            .iter()
            .all(|letter| theirs.find(|c| *c >= letter) == Some(letter))
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_letters(iter)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_letters_sorts_and_dedups() {
        let set = LetterSet::from_letters(['t', 'a', 'c', 'a']);
        assert_eq!(set.letters(), &['a', 'c', 't']);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn from_word_case_folds() {
        assert_eq!(LetterSet::from_word("CAT"), LetterSet::from_word("cat"));
        assert_eq!(LetterSet::from_word("CaT").to_string(), "act");
    }

    #[test]
    fn from_word_keeps_non_alphabetic_characters() {
        let set = LetterSet::from_word("it's");
        assert!(set.contains('\''));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn empty_word_gives_empty_set() {
        let set = LetterSet::from_word("");
        assert!(set.is_empty());
        assert_eq!(set.to_string(), "");
    }

    #[test]
    fn subset_checks() {
        let word = LetterSet::from_word("crane");
        assert!(LetterSet::from_word("ace").is_subset_of(&word));
        assert!(LetterSet::from_word("n").is_subset_of(&word));
        assert!(LetterSet::default().is_subset_of(&word));
        assert!(word.is_subset_of(&word));

        assert!(!LetterSet::from_word("cat").is_subset_of(&word));
        assert!(!LetterSet::from_word("z").is_subset_of(&word));
        assert!(!LetterSet::from_word("a").is_subset_of(&LetterSet::default()));
    }

    #[test]
    fn subset_with_gap_letters() {
        // 'b' sits between letters of the superset and must not match
        let word = LetterSet::from_word("ace");
        assert!(!LetterSet::from_word("ab").is_subset_of(&word));
        assert!(!LetterSet::from_word("bc").is_subset_of(&word));
    }

    #[test]
    fn contains_letter() {
        let set = LetterSet::from_word("crane");
        assert!(set.contains('c'));
        assert!(!set.contains('z'));
    }

    #[test]
    fn collect_from_iterator() {
        let set: LetterSet = "hello".chars().collect();
        assert_eq!(set.to_string(), "ehlo");
    }
}
