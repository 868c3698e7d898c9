//! Formatting utilities for terminal output

use crate::core::LetterSet;
use crate::tree::{LetterNode, LetterTree};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage of `part` in `total`, zero for an empty total
#[must_use]
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Join letter sets with commas, showing at most `limit` of them
#[must_use]
pub fn format_set_list(sets: &[LetterSet], limit: usize) -> String {
    let shown: Vec<String> = sets.iter().take(limit).map(ToString::to_string).collect();
    let mut line = shown.join(", ");

    if sets.len() > limit {
        line.push_str(&format!(" … (+{} more)", sets.len() - limit));
    }
    line
}

/// Render a tree as an indented outline, one line per node below the root
///
/// Nodes deeper than `max_depth` are left out.
#[must_use]
pub fn render_tree(tree: &LetterTree, max_depth: usize) -> Vec<String> {
    let mut lines = Vec::new();
    render_children(tree.root(), "", 1, max_depth, &mut lines);
    lines
}

fn render_children(
    node: &LetterNode,
    indent: &str,
    depth: usize,
    max_depth: usize,
    lines: &mut Vec<String>,
) {
    if depth > max_depth {
        return;
    }

    let count = node.children().len();
    for (i, child) in node.children().iter().enumerate() {
        let last = i + 1 == count;
        let branch = if last { "└── " } else { "├── " };
        lines.push(format!("{indent}{branch}{}", child.letter()));

        let next_indent = format!("{indent}{}", if last { "    " } else { "│   " });
        render_children(child, &next_indent, depth + 1, max_depth, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build_tree;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn percent_handles_empty_total() {
        assert!(percent(3, 0).abs() < f64::EPSILON);
        assert!((percent(1, 4) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn set_list_truncates() {
        let sets: Vec<LetterSet> = ["ab", "ac", "bc"].iter().map(|s| LetterSet::from_word(s)).collect();
        assert_eq!(format_set_list(&sets, 5), "ab, ac, bc");
        assert_eq!(format_set_list(&sets, 2), "ab, ac … (+1 more)");
        assert_eq!(format_set_list(&[], 2), "");
    }

    #[test]
    fn tree_outline() {
        let sets: Vec<LetterSet> = ["abc", "abd", "bc"].iter().map(|s| LetterSet::from_word(s)).collect();
        let lines = render_tree(&build_tree(&sets), 3);

        assert_eq!(
            lines,
            vec![
                "├── a",
                "│   └── b",
                "│       ├── c",
                "│       └── d",
                "└── b",
                "    └── c",
            ]
        );
    }

    #[test]
    fn tree_outline_depth_limit() {
        let sets: Vec<LetterSet> = ["abc", "bc"].iter().map(|s| LetterSet::from_word(s)).collect();
        let lines = render_tree(&build_tree(&sets), 1);
        assert_eq!(lines, vec!["├── a", "└── b"]);
    }

    #[test]
    fn empty_tree_outline() {
        assert!(render_tree(&LetterTree::new(), 4).is_empty());
    }
}
