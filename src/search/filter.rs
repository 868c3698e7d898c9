//! Incomplete set filtering
//!
//! Keeps only maximal sets so that every leaf of the tree is a full-size group.

use super::QualifyingSet;

/// Drop every set smaller than `max_set_size` when `enabled` is set
///
/// With the flag off the collection passes through untouched.
#[must_use]
pub fn purge_incomplete(
    sets: Vec<QualifyingSet>,
    max_set_size: usize,
    enabled: bool,
) -> Vec<QualifyingSet> {
    if !enabled {
        return sets;
    }

    sets.into_iter()
        .filter(|set| set.len() >= max_set_size)
        .collect()
}
