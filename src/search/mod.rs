//! Letter combination search
//!
//! The search runs as independent stages: generate candidates for a size,
//! test them against the corpus, accumulate the qualifying ones, and finally
//! (optionally) purge sets below the maximum size.

pub mod candidates;
mod engine;
pub mod filter;

pub use engine::{CombinationSearch, QualifyingSet, SearchEvent};
pub use filter::purge_incomplete;
