//! Generate command
//!
//! Runs the whole pipeline: load the word list, search letter combinations,
//! purge incomplete sets, build and verify the tree, and write the artifact.

use crate::config::{ConfigError, GenerateConfig};
use crate::core::{Alphabet, Corpus};
use crate::search::{CombinationSearch, QualifyingSet, SearchEvent, purge_incomplete};
use crate::tree::io::{TreeIoError, write_json};
use crate::tree::{LetterTree, PathCheck, build_tree, check_path_count};
use crate::wordlists::load_from_file;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Qualifying set count for one combination size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSummary {
    pub size: usize,
    pub candidates: u64,
    pub qualified: usize,
}

/// Result of a generate run
#[derive(Debug)]
pub struct GenerateResult {
    pub total_words: usize,
    pub min_valid_words: usize,
    pub alphabet: Alphabet,
    pub per_size: Vec<SizeSummary>,
    /// Qualifying sets found before purging
    pub found: usize,
    /// Sets that went into the tree
    pub qualifying: Vec<QualifyingSet>,
    pub tree: LetterTree,
    pub path_check: PathCheck,
    pub duration: Duration,
}

impl GenerateResult {
    /// Number of sets removed by the purge step
    #[must_use]
    pub fn purged(&self) -> usize {
        self.found - self.qualifying.len()
    }
}

/// Error type for the generate command
#[derive(Debug)]
pub enum GenerateError {
    Config(ConfigError),
    ReadWordList { path: PathBuf, source: io::Error },
    WriteTree { path: PathBuf, source: TreeIoError },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Invalid configuration: {e}"),
            Self::ReadWordList { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::WriteTree { path, source } => {
                write!(f, "Failed to write tree to {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::ReadWordList { source, .. } => Some(source),
            Self::WriteTree { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for GenerateError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Run the full pipeline described by `config`
///
/// The configuration is validated before the word list is opened, and the
/// artifact is only written once every in-memory stage has finished.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the word list cannot be
/// read, or the artifact cannot be written.
pub fn run_generate(config: &GenerateConfig) -> Result<GenerateResult, GenerateError> {
    config.validate()?;

    let corpus =
        load_from_file(&config.word_list_path).map_err(|source| GenerateError::ReadWordList {
            path: config.word_list_path.clone(),
            source,
        })?;

    if config.show_progress {
        println!(
            "📖 Loaded {} words from {}",
            corpus.len().to_string().bright_yellow(),
            config.word_list_path.display()
        );
    }

    let result = generate_tree(&corpus, config)?;

    write_json(&result.tree, &config.output_path).map_err(|source| {
        GenerateError::WriteTree {
            path: config.output_path.clone(),
            source,
        }
    })?;

    Ok(result)
}

/// Run the in-memory stages over an already loaded corpus
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn generate_tree(
    corpus: &Corpus,
    config: &GenerateConfig,
) -> Result<GenerateResult, ConfigError> {
    config.validate()?;

    let start = Instant::now();
    let alphabet = config.alphabet()?;
    let total_words = corpus.len();
    let min_valid_words = config.min_valid_words(total_words);

    if config.show_progress {
        println!(
            "🔎 Searching for letter sets with at least {} valid words ({}% of {total_words})",
            min_valid_words.to_string().bright_yellow().bold(),
            config.threshold * 100.0
        );
    }

    let search = CombinationSearch::new(corpus, &alphabet, min_valid_words, config.max_set_size);
    let mut per_size = Vec::with_capacity(search.searched_max_size());
    let mut pb = ProgressBar::hidden();
    let mut size_candidates = 0;

    let found_sets = search.run_with(|event| match event {
        SearchEvent::SizeStarted { size, candidates } => {
            size_candidates = candidates;
            pb = size_progress_bar(size, candidates, config.show_progress);
        }
        SearchEvent::CandidateTested {
            candidate,
            support,
            qualified,
        } => {
            if qualified && config.list_sets {
                pb.suspend(|| println!("  Found valid set: {candidate} ({support} words)"));
            }
            pb.inc(1);
        }
        SearchEvent::SizeFinished { size, qualified } => {
            pb.finish_with_message(format!("size {size}: {qualified} qualified"));
            per_size.push(SizeSummary {
                size,
                candidates: size_candidates,
                qualified,
            });
        }
    });

    let found = found_sets.len();
    let qualifying = purge_incomplete(found_sets, config.max_set_size, config.purge_incomplete);

    let tree = build_tree(qualifying.iter().map(|set| &set.letters));
    let path_check = check_path_count(&tree, qualifying.len());

    Ok(GenerateResult {
        total_words,
        min_valid_words,
        alphabet,
        per_size,
        found,
        qualifying,
        tree,
        path_check,
        duration: start.elapsed(),
    })
}

fn size_progress_bar(size: usize, candidates: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(candidates);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} size {prefix} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb.set_prefix(size.to_string());
    pb
}
