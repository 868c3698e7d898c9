//! Prefix tree node types
//!
//! Each node owns its children outright. Children are unique by letter and
//! always kept ascending, which makes serialized output byte-for-byte
//! reproducible for the same set of paths.

use crate::core::LetterSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the root sentinel in serialized trees
pub const ROOT_LABEL: &str = "root";

/// The letter a node holds, or the root sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum NodeLetter {
    Root,
    Letter(char),
}

/// Error type for node labels that are neither the root sentinel nor one letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNodeLabel(pub String);

impl fmt::Display for InvalidNodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node label must be \"{ROOT_LABEL}\" or a single letter, got \"{}\"",
            self.0
        )
    }
}

impl std::error::Error for InvalidNodeLabel {}

impl From<NodeLetter> for String {
    fn from(letter: NodeLetter) -> Self {
        match letter {
            NodeLetter::Root => ROOT_LABEL.to_string(),
            NodeLetter::Letter(c) => c.to_string(),
        }
    }
}

impl TryFrom<String> for NodeLetter {
    type Error = InvalidNodeLabel;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        if label == ROOT_LABEL {
            return Ok(Self::Root);
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::Letter(c)),
            _ => Err(InvalidNodeLabel(label)),
        }
    }
}

impl fmt::Display for NodeLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "{ROOT_LABEL}"),
            Self::Letter(c) => write!(f, "{c}"),
        }
    }
}

/// A tree node: one letter plus its children, ascending by letter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterNode {
    letter: NodeLetter,
    children: Vec<LetterNode>,
}

impl LetterNode {
    #[must_use]
    pub const fn new(letter: NodeLetter) -> Self {
        Self {
            letter,
            children: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> NodeLetter {
        self.letter
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Find the child holding `letter`
    #[must_use]
    pub fn child(&self, letter: char) -> Option<&Self> {
        self.children
            .binary_search_by_key(&NodeLetter::Letter(letter), |child| child.letter)
            .ok()
            .map(|index| &self.children[index])
    }

    /// Find the child holding `letter`, creating it in sorted position if absent
    ///
    /// Returns the child and whether it was created.
    pub(super) fn child_or_insert(&mut self, letter: char) -> (&mut Self, bool) {
        let key = NodeLetter::Letter(letter);
        match self
            .children
            .binary_search_by_key(&key, |child| child.letter)
        {
            Ok(index) => (&mut self.children[index], false),
            Err(index) => {
                self.children.insert(index, Self::new(key));
                (&mut self.children[index], true)
            }
        }
    }

    /// Number of nodes below this one
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// Length of the longest downward path from this node
    #[must_use]
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.height())
            .max()
            .unwrap_or(0)
    }
}

/// A prefix tree of sorted letter sets rooted at the sentinel node
///
/// Serializes as the root node itself:
/// `{"letter": "root", "children": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterTree {
    root: LetterNode,
}

impl Default for LetterTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterTree {
    /// An empty tree: the root sentinel with no children
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: LetterNode::new(NodeLetter::Root),
        }
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> &LetterNode {
        &self.root
    }

    #[inline]
    pub(super) const fn root_mut(&mut self) -> &mut LetterNode {
        &mut self.root
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Follow `prefix` from the root
    ///
    /// An empty prefix returns the root.
    #[must_use]
    pub fn find(&self, prefix: &[char]) -> Option<&LetterNode> {
        prefix
            .iter()
            .try_fold(&self.root, |node, &letter| node.child(letter))
    }

    /// Whether the sorted letters of `set` form a root-to-node path
    #[must_use]
    pub fn contains(&self, set: &LetterSet) -> bool {
        !set.is_empty() && self.find(set.letters()).is_some()
    }

    /// Every root-to-leaf path as a letter set, in tree order
    #[must_use]
    pub fn paths(&self) -> Vec<LetterSet> {
        self.completions(&[])
    }

    /// Every root-to-leaf path passing through `prefix`
    ///
    /// Returns nothing when the prefix is not in the tree.
    #[must_use]
    pub fn completions(&self, prefix: &[char]) -> Vec<LetterSet> {
        let mut found = Vec::new();
        if let Some(node) = self.find(prefix) {
            let mut path = prefix.to_vec();
            collect_leaf_paths(node, &mut path, &mut found);
        }
        found
    }

    /// Number of letter nodes, excluding the root
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }

    /// Length of the longest root-to-leaf path
    #[must_use]
    pub fn depth(&self) -> usize {
        self.root.height()
    }
}

fn collect_leaf_paths(node: &LetterNode, path: &mut Vec<char>, found: &mut Vec<LetterSet>) {
    if node.is_leaf() {
        if !path.is_empty() {
            found.push(LetterSet::from_letters(path.iter().copied()));
        }
        return;
    }

    for child in &node.children {
        if let NodeLetter::Letter(letter) = child.letter {
            path.push(letter);
            collect_leaf_paths(child, path, found);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(paths: &[&str]) -> LetterTree {
        let mut tree = LetterTree::new();
        for path in paths {
            let mut node = tree.root_mut();
            for letter in path.chars() {
                node = node.child_or_insert(letter).0;
            }
        }
        tree
    }

    fn letters_of(node: &LetterNode) -> String {
        node.children().iter().map(|c| c.letter().to_string()).collect()
    }

    #[test]
    fn new_tree_is_empty() {
        let tree = LetterTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.root().letter(), NodeLetter::Root);
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.depth(), 0);
        assert!(tree.paths().is_empty());
    }

    #[test]
    fn children_stay_sorted_regardless_of_insert_order() {
        let tree = tree_with(&["d", "a", "c", "b"]);
        assert_eq!(letters_of(tree.root()), "abcd");
    }

    #[test]
    fn child_or_insert_reuses_existing() {
        let mut tree = LetterTree::new();
        assert!(tree.root_mut().child_or_insert('a').1);
        assert!(!tree.root_mut().child_or_insert('a').1);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn find_follows_prefix() {
        let tree = tree_with(&["ac", "ad", "bc"]);

        assert_eq!(tree.find(&[]).unwrap().letter(), NodeLetter::Root);
        assert_eq!(letters_of(tree.find(&['a']).unwrap()), "cd");
        assert!(tree.find(&['a', 'd']).unwrap().is_leaf());
        assert!(tree.find(&['c']).is_none());
    }

    #[test]
    fn contains_whole_and_partial_paths() {
        let tree = tree_with(&["ac"]);
        assert!(tree.contains(&LetterSet::from_word("ca")));
        assert!(tree.contains(&LetterSet::from_word("a")));
        assert!(!tree.contains(&LetterSet::from_word("c")));
        assert!(!tree.contains(&LetterSet::default()));
    }

    #[test]
    fn paths_in_tree_order() {
        let tree = tree_with(&["bc", "ac", "ab"]);
        let paths: Vec<String> = tree.paths().iter().map(ToString::to_string).collect();
        assert_eq!(paths, vec!["ab", "ac", "bc"]);
    }

    #[test]
    fn completions_below_prefix() {
        let tree = tree_with(&["abc", "abd", "acd", "bcd"]);

        let below: Vec<String> = tree
            .completions(&['a'])
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(below, vec!["abc", "abd", "acd"]);

        assert!(tree.completions(&['z']).is_empty());
    }

    #[test]
    fn counts_and_depth() {
        let tree = tree_with(&["abc", "abd", "b"]);
        // a, ab, abc, abd and the root-level b
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn node_letter_labels() {
        assert_eq!(String::from(NodeLetter::Root), "root");
        assert_eq!(String::from(NodeLetter::Letter('q')), "q");

        assert_eq!(NodeLetter::try_from("root".to_string()), Ok(NodeLetter::Root));
        assert_eq!(
            NodeLetter::try_from("é".to_string()),
            Ok(NodeLetter::Letter('é'))
        );
        assert!(NodeLetter::try_from("ab".to_string()).is_err());
        assert!(NodeLetter::try_from(String::new()).is_err());
    }

    #[test]
    fn serializes_with_letter_and_children_fields() {
        let tree = tree_with(&["ac"]);
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(
            json,
            r#"{"letter":"root","children":[{"letter":"a","children":[{"letter":"c","children":[]}]}]}"#
        );
    }

    #[test]
    fn deserializes_back() {
        let tree = tree_with(&["ab", "ac", "b"]);
        let json = serde_json::to_string(&tree).unwrap();
        let back: LetterTree = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }

    #[test]
    fn rejects_multi_letter_labels() {
        let json = r#"{"letter":"root","children":[{"letter":"ab","children":[]}]}"#;
        assert!(serde_json::from_str::<LetterTree>(json).is_err());
    }
}
