//! Display functions for command results

use super::formatters::{create_progress_bar, format_set_list, percent, render_tree};
use crate::commands::{GenerateResult, InspectResult};
use crate::config::GenerateConfig;
use colored::Colorize;

/// Print the summary of a generate run
pub fn print_generate_result(result: &GenerateResult, config: &GenerateConfig) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LETTER TREE GENERATED".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!("   Words loaded:     {}", result.total_words);
    println!("   Alphabet:         {}", result.alphabet);
    println!(
        "   Min valid words:  {} ({}% of {})",
        result.min_valid_words.to_string().bright_yellow().bold(),
        config.threshold * 100.0,
        result.total_words
    );

    if result.min_valid_words == 0 {
        println!(
            "   {}",
            "⚠ Minimum is 0: every candidate qualifies".yellow()
        );
    }

    println!("\n📈 {}", "Qualifying sets by size:".bright_cyan().bold());
    for summary in &result.per_size {
        let bar = create_progress_bar(summary.qualified as f64, summary.candidates as f64, 30);
        println!(
            "   {}: [{}] {:6} / {}",
            summary.size,
            bar.green(),
            summary.qualified,
            summary.candidates
        );
    }

    println!("\n🌳 {}", "Tree:".bright_cyan().bold());
    println!("   Sets found:       {}", result.found);
    if config.purge_incomplete {
        println!(
            "   Purged:           {} ({:.1}% smaller than {})",
            result.purged(),
            percent(result.purged(), result.found),
            config.max_set_size
        );
    }
    println!(
        "   Sets in tree:     {}",
        result.qualifying.len().to_string().bright_yellow().bold()
    );
    println!("   Nodes:            {}", result.tree.node_count());
    println!("   Paths:            {}", result.path_check.paths);

    if !result.path_check.is_consistent() {
        let note = if config.purge_incomplete {
            "⚠ Path count differs from the number of sets in the tree"
        } else {
            "ℹ Path count differs because smaller sets end on internal nodes"
        };
        println!("   {}", note.yellow());
    }

    println!(
        "\n✅ Tree saved to {} in {:.2}s",
        config.output_path.display().to_string().green().bold(),
        result.duration.as_secs_f64()
    );
}

/// Print the result of inspecting a tree artifact
pub fn print_inspect_result(result: &InspectResult, limit: usize, show_tree: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "TREE:".bright_cyan().bold(),
        result.path.display().to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Paths:   {}", result.path_count);
    println!("   Nodes:   {}", result.node_count);
    println!("   Depth:   {}", result.depth);

    if let Some(depth) = show_tree {
        println!();
        for line in render_tree(&result.tree, depth) {
            println!("   {line}");
        }
    }

    println!();
    if !result.prefix_found() {
        println!(
            "{}",
            format!("❌ No path starts with '{}'", result.prefix).red().bold()
        );
        return;
    }

    let heading = if result.prefix.is_empty() {
        "All letter sets:".to_string()
    } else {
        format!("Letter sets starting with '{}':", result.prefix)
    };
    println!(
        "🔤 {} {}",
        heading.bright_cyan().bold(),
        result.completions.len()
    );
    println!("   {}", format_set_list(&result.completions, limit));
}
