//! Candidate generation
//!
//! Enumerates the k-combinations of an alphabet in lexicographic order of the
//! alphabet sequence. Each combination is visited exactly once.

use crate::core::{Alphabet, LetterSet};
use itertools::Itertools;

/// All `size`-letter candidates drawn from `alphabet`
///
/// A size of zero, or one larger than the alphabet, yields nothing.
///
/// # Examples
/// ```
/// use letter_tree::core::Alphabet;
/// use letter_tree::search::candidates::candidates_of_size;
///
/// let alphabet = Alphabet::from_range('a', 'c').unwrap();
/// let pairs: Vec<String> = candidates_of_size(&alphabet, 2)
///     .map(|set| set.to_string())
///     .collect();
/// assert_eq!(pairs, vec!["ab", "ac", "bc"]);
/// ```
pub fn candidates_of_size(alphabet: &Alphabet, size: usize) -> impl Iterator<Item = LetterSet> + '_ {
    // itertools yields one empty combination for k = 0
    let size_is_usable = size > 0 && size <= alphabet.len();

    alphabet
        .letters()
        .iter()
        .copied()
        .combinations(size)
        .filter(move |_| size_is_usable)
        .map(LetterSet::from_letters)
}

/// Number of k-combinations of n items, C(n, k)
///
/// Saturates at `u64::MAX` rather than overflowing.
#[must_use]
pub fn combination_count(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }

    let k = k.min(n - k) as u64;
    let n = n as u64;

    (0..k).fold(1u64, |acc, i| {
        // acc * (n - i) / (i + 1) stays integral at every step
        acc.checked_mul(n - i).map_or(u64::MAX, |product| product / (i + 1))
    })
}
