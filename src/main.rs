//! Letter Tree - CLI
//!
//! Generates a prefix tree of letter groups shared by a fraction of a word
//! list, and inspects previously generated trees.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use letter_tree::{
    commands::{inspect_tree, run_generate},
    config::{
        DEFAULT_CHAR_END, DEFAULT_CHAR_START, DEFAULT_MAX_SET_SIZE, DEFAULT_OUTPUT,
        DEFAULT_THRESHOLD, DEFAULT_WORD_LIST, GenerateConfig,
    },
    output::{print_generate_result, print_inspect_result},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "letter_tree",
    about = "Find letter groups shared by a fraction of a word list and store them as a prefix tree",
    version,
    author,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a letter tree (default when no command is given)
    Generate(GenerateArgs),

    /// Inspect a previously generated tree
    Inspect {
        /// Path to the tree JSON
        #[arg(default_value = DEFAULT_OUTPUT)]
        tree: PathBuf,

        /// Only list letter sets starting with these letters (order and case ignored)
        #[arg(short, long)]
        prefix: Option<String>,

        /// Maximum number of letter sets to list
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,

        /// Print the tree outline down to this depth
        #[arg(long, value_name = "DEPTH")]
        show_tree: Option<usize>,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Word list file, one word per line
    #[arg(short = 'w', long, default_value = DEFAULT_WORD_LIST)]
    word_list: PathBuf,

    /// Where to write the tree JSON
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Minimum fraction of words that must contain a letter set (0.0-1.0)
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,

    /// First letter of the searched alphabet range
    #[arg(long, default_value_t = DEFAULT_CHAR_START)]
    char_start: char,

    /// Last letter of the searched alphabet range
    #[arg(long, default_value_t = DEFAULT_CHAR_END)]
    char_end: char,

    /// Largest letter set size to test
    #[arg(short, long, default_value_t = DEFAULT_MAX_SET_SIZE)]
    max_set_size: usize,

    /// Keep sets smaller than the maximum size (default: purge them)
    #[arg(long)]
    no_purge_incomplete: bool,

    /// List every qualifying set as it is found
    #[arg(short, long)]
    verbose: bool,

    /// Hide progress bars and status lines
    #[arg(short, long)]
    quiet: bool,
}

impl From<GenerateArgs> for GenerateConfig {
    fn from(args: GenerateArgs) -> Self {
        Self {
            word_list_path: args.word_list,
            output_path: args.output,
            threshold: args.threshold,
            char_start: args.char_start,
            char_end: args.char_end,
            max_set_size: args.max_set_size,
            purge_incomplete: !args.no_purge_incomplete,
            show_progress: !args.quiet,
            list_sets: args.verbose,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate(args)) => run_generate_command(args.into()),
        Some(Commands::Inspect {
            tree,
            prefix,
            limit,
            show_tree,
        }) => run_inspect_command(&tree, prefix.as_deref(), limit, show_tree),
        None => run_generate_command(cli.generate.into()),
    }
}

fn run_generate_command(config: GenerateConfig) -> Result<()> {
    if config.show_progress {
        println!("\n{}", "═".repeat(60).cyan());
        println!(" {} ", "Letter Tree Generator".bright_cyan().bold());
        println!("{}", "═".repeat(60).cyan());
        println!(
            "\nAlphabet {}..{}, sets up to {} letters, threshold {}",
            config.char_start, config.char_end, config.max_set_size, config.threshold
        );
        println!();
    }

    let result = run_generate(&config).context("Letter tree generation failed")?;

    if config.show_progress {
        print_generate_result(&result, &config);
    } else {
        println!(
            "Tree built with {} total paths, saved to {}",
            result.path_check.paths,
            config.output_path.display()
        );
    }
    Ok(())
}

fn run_inspect_command(
    tree: &Path,
    prefix: Option<&str>,
    limit: usize,
    show_tree: Option<usize>,
) -> Result<()> {
    let result = inspect_tree(tree, prefix)
        .with_context(|| format!("Failed to inspect tree {}", tree.display()))?;

    print_inspect_result(&result, limit, show_tree);
    Ok(())
}
