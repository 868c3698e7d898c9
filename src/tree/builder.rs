//! Prefix tree construction
//!
//! Inserts each letter set as its sorted letter sequence, sharing common
//! prefixes. Children are placed in sorted position on creation, so the tree
//! is canonical after every single insertion.

use super::LetterTree;
use crate::core::LetterSet;

/// Incremental builder for a `LetterTree`
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: LetterTree,
    inserted: usize,
    nodes_created: usize,
}

impl TreeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one letter set
    ///
    /// Returns `true` if at least one new node was created. Empty sets add
    /// nothing.
    pub fn insert(&mut self, set: &LetterSet) -> bool {
        if set.is_empty() {
            return false;
        }
        self.inserted += 1;

        let mut node = self.tree.root_mut();
        let mut created_any = false;
        for &letter in set.letters() {
            let (child, created) = node.child_or_insert(letter);
            created_any |= created;
            if created {
                self.nodes_created += 1;
            }
            node = child;
        }

        created_any
    }

    /// Number of non-empty sets inserted so far
    #[inline]
    #[must_use]
    pub const fn inserted(&self) -> usize {
        self.inserted
    }

    /// Number of nodes created so far, excluding the root
    #[inline]
    #[must_use]
    pub const fn nodes_created(&self) -> usize {
        self.nodes_created
    }

    /// View the tree built so far
    #[inline]
    #[must_use]
    pub const fn tree(&self) -> &LetterTree {
        &self.tree
    }

    /// Finish construction and hand over the tree
    #[must_use]
    pub fn finish(self) -> LetterTree {
        self.tree
    }
}

/// Build a tree from a collection of letter sets
///
/// # Examples
/// ```
/// use letter_tree::core::LetterSet;
/// use letter_tree::tree::build_tree;
///
/// let sets = [LetterSet::from_word("ca"), LetterSet::from_word("ab")];
/// let tree = build_tree(&sets);
///
/// assert_eq!(tree.node_count(), 3);
/// assert!(tree.contains(&LetterSet::from_word("ac")));
/// ```
pub fn build_tree<'a, I>(sets: I) -> LetterTree
where
    I: IntoIterator<Item = &'a LetterSet>,
{
    let mut builder = TreeBuilder::new();
    for set in sets {
        builder.insert(set);
    }
    builder.finish()
}
