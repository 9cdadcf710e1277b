// documentation quality heuristic

use crate::fs_scan::PatternTree;
use crate::utils;

/// keywords a useful readme is expected to mention
const README_KEYWORDS: [&str; 4] = ["usage", "example", "installation", "configuration"];

/// score documentation quality from the readme and inline comment density
pub fn calculate_documentation_score(tree: &PatternTree) -> f64 {
    let mut score: f64 = 0.0;

    // first root-level README*.md, in lexicographic order for determinism
    if let Some(readme) = tree.readme_files().first() {
        // an unreadable readme simply contributes nothing
        if let Ok(content) = utils::read_text_tolerant(&readme.path) {
            let length = content.chars().count();
            if length > 1000 {
                score += 30.0;
            } else if length > 500 {
                score += 20.0;
            } else if length > 200 {
                score += 10.0;
            }

            let content_lower = content.to_lowercase();
            for keyword in README_KEYWORDS {
                if content_lower.contains(keyword) {
                    score += 10.0;
                }
            }

            if content.contains("```") {
                score += 20.0;
            }
        }
    }

    // inline documentation density across all script files
    let script_files = tree.script_files();
    if !script_files.is_empty() {
        let mut total_lines = 0usize;
        let mut comment_lines = 0usize;

        for file in script_files {
            if let Ok(content) = utils::read_text_tolerant(&file.path) {
                total_lines += utils::total_lines(&content);
                comment_lines += content
                    .split('\n')
                    .filter(|line| utils::is_comment_line(line))
                    .count();
            }
        }

        if total_lines > 0 {
            let comment_ratio = comment_lines as f64 / total_lines as f64;
            if comment_ratio > 0.3 {
                score += 20.0;
            } else if comment_ratio > 0.2 {
                score += 15.0;
            } else if comment_ratio > 0.1 {
                score += 10.0;
            }
        }
    }

    score.min(100.0)
}
