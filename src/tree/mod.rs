//! Prefix tree of qualifying letter sets
//!
//! Building, verifying and persisting the tree artifact.

mod builder;
pub mod io;
mod node;
mod verify;

pub use builder::{TreeBuilder, build_tree};
pub use node::{InvalidNodeLabel, LetterNode, LetterTree, NodeLetter, ROOT_LABEL};
pub use verify::{PathCheck, check_path_count, count_leaf_paths, is_canonical};
