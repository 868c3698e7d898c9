//! Command implementations

pub mod generate;
pub mod inspect;

pub use generate::{GenerateError, GenerateResult, SizeSummary, generate_tree, run_generate};
pub use inspect::{InspectResult, inspect_tree};
