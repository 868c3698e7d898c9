//! Core domain types for letter set analysis
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and cheap to construct in tests.

mod alphabet;
mod corpus;
mod letter_set;

pub use alphabet::{Alphabet, AlphabetError};
pub use corpus::Corpus;
pub use letter_set::LetterSet;
