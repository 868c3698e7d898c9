//! Tree sanity checks
//!
//! Diagnostics only: nothing here fails a run, callers decide what a mismatch
//! means.

use super::{LetterNode, LetterTree, NodeLetter};

/// Count root-to-leaf paths
///
/// A root without children contributes zero paths, so an empty tree has none.
///
/// # Examples
/// ```
/// use letter_tree::core::LetterSet;
/// use letter_tree::tree::{build_tree, count_leaf_paths, LetterTree};
///
/// assert_eq!(count_leaf_paths(&LetterTree::new()), 0);
///
/// let tree = build_tree(&[LetterSet::from_word("ab"), LetterSet::from_word("ac")]);
/// assert_eq!(count_leaf_paths(&tree), 2);
/// ```
#[must_use]
pub fn count_leaf_paths(tree: &LetterTree) -> usize {
    count_from(tree.root())
}

fn count_from(node: &LetterNode) -> usize {
    if node.is_leaf() {
        return usize::from(node.letter() != NodeLetter::Root);
    }

    node.children().iter().map(count_from).sum()
}

/// Check the ordering invariant of a tree
///
/// Holds when the root is the only sentinel, children are strictly ascending
/// (so unique by letter), and every child letter comes after its parent's
/// letter, making each path a sorted letter set.
#[must_use]
pub fn is_canonical(tree: &LetterTree) -> bool {
    tree.root().letter() == NodeLetter::Root && children_canonical(tree.root())
}

fn children_canonical(node: &LetterNode) -> bool {
    let children = node.children();

    let letters_valid = children.iter().all(|child| match child.letter() {
        NodeLetter::Root => false,
        letter => letter > node.letter(),
    });
    let ascending = children
        .windows(2)
        .all(|pair| pair[0].letter() < pair[1].letter());

    letters_valid && ascending && children.iter().all(children_canonical)
}

/// Outcome of comparing the tree's path count with the qualifying sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathCheck {
    pub paths: usize,
    pub expected: usize,
}

impl PathCheck {
    #[inline]
    #[must_use]
    pub const fn is_consistent(self) -> bool {
        self.paths == self.expected
    }
}

/// Compare the leaf path count against `expected`
///
/// Equal counts are guaranteed only when every set has the same size, i.e.
/// after purging incomplete sets.
#[must_use]
pub fn check_path_count(tree: &LetterTree, expected: usize) -> PathCheck {
    PathCheck {
        paths: count_leaf_paths(tree),
        expected,
    }
}
