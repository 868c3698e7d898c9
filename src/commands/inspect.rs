//! Inspect command
//!
//! Reads a tree artifact back, re-runs the verifier and looks up the letter
//! sets reachable below a prefix.

use crate::core::LetterSet;
use crate::tree::io::{TreeIoError, read_json};
use crate::tree::{LetterTree, count_leaf_paths};
use std::path::{Path, PathBuf};

/// Result of inspecting a tree artifact
#[derive(Debug)]
pub struct InspectResult {
    pub path: PathBuf,
    pub tree: LetterTree,
    pub path_count: usize,
    pub node_count: usize,
    pub depth: usize,
    /// Prefix letters, case-folded and sorted into tree order
    pub prefix: LetterSet,
    /// Leaf paths below the prefix, in tree order
    pub completions: Vec<LetterSet>,
}

impl InspectResult {
    /// Whether the prefix names a path in the tree
    #[must_use]
    pub fn prefix_found(&self) -> bool {
        self.prefix.is_empty() || self.tree.contains(&self.prefix)
    }
}

/// Load and summarize the tree at `path`
///
/// The prefix is treated as a letter set: case-folded, deduplicated and sorted,
/// because every path in the tree is a sorted set.
///
/// # Errors
///
/// Returns an error if the artifact cannot be read, is not a tree, or its
/// children are out of canonical order.
pub fn inspect_tree<P: AsRef<Path>>(
    path: P,
    prefix: Option<&str>,
) -> Result<InspectResult, TreeIoError> {
    let path = path.as_ref();
    let tree = read_json(path)?;

    let prefix = prefix.map(LetterSet::from_word).unwrap_or_default();
    let completions = tree.completions(prefix.letters());

    Ok(InspectResult {
        path: path.to_path_buf(),
        path_count: count_leaf_paths(&tree),
        node_count: tree.node_count(),
        depth: tree.depth(),
        prefix,
        completions,
        tree,
    })
}
