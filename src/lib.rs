//! Letter Tree
//!
//! Finds small groups of letters shared by at least a given fraction of a word
//! list, and stores them as a prefix tree of sorted letter sequences.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_tree::core::{Alphabet, Corpus};
//! use letter_tree::search::{CombinationSearch, purge_incomplete};
//! use letter_tree::tree::{build_tree, count_leaf_paths};
//!
//! let corpus = Corpus::from_words(["cat", "car", "can"]);
//! let alphabet = Alphabet::from_range('a', 'z').unwrap();
//!
//! // Every letter set shared by all three words, up to two letters
//! let found = CombinationSearch::new(&corpus, &alphabet, 3, 2).run();
//! let complete = purge_incomplete(found, 2, true);
//!
//! let tree = build_tree(complete.iter().map(|set| &set.letters));
//! assert_eq!(count_leaf_paths(&tree), 1);
//! ```

// Core domain types
pub mod core;

// Letter combination search
pub mod search;

// Prefix tree construction and persistence
pub mod tree;

// Word lists
pub mod wordlists;

// Run configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
