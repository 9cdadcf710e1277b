// control-structure density as a cyclomatic complexity stand-in

use crate::fs_scan::PatternTree;
use crate::utils;
use lazy_static::lazy_static;
use regex::Regex;

/// default score assumed for patterns with no code files
const NON_CODE_DEFAULT: f64 = 20.0;

lazy_static! {
    static ref CONTROL_STRUCTURE: Regex =
        Regex::new(r"\b(if|for|while|try|except|with|def|class)\b").unwrap();
}

/// average normalized control-structure density across code files
///
/// lower is better; the aggregator inverts this score
pub fn calculate_complexity_score(tree: &PatternTree) -> f64 {
    let mut total_complexity = 0.0;
    let mut file_count = 0usize;

    for file in tree.code_files() {
        let content = match utils::read_text_tolerant(&file.path) {
            Ok(content) => content,
            Err(_) => continue,
        };

        let code_lines: Vec<&str> = content
            .split('\n')
            .filter(|line| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            })
            .collect();
        if code_lines.is_empty() {
            continue;
        }

        let control_structures = code_lines
            .iter()
            .filter(|line| CONTROL_STRUCTURE.is_match(line))
            .count();

        // cyclomatic complexity approximation, normalized by file size
        let file_complexity = (control_structures + 1) as f64;
        total_complexity += file_complexity / code_lines.len() as f64 * 100.0;
        file_count += 1;
    }

    if file_count == 0 {
        return NON_CODE_DEFAULT;
    }

    (total_complexity / file_count as f64).min(100.0)
}
