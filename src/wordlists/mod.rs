//! Word lists for letter set analysis
//!
//! Reads line-oriented word lists into a `Corpus`.

pub mod loader;

pub use loader::{corpus_from_slice, load_from_file};
