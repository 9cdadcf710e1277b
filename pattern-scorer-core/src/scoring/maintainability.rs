// maintainability heuristics: layout, hygiene files, naming, file sizes

use crate::fs_scan::PatternTree;
use crate::utils;
use lazy_static::lazy_static;
use regex::Regex;

/// recognized manifest and tooling config filenames, worth 5 points each
const MANIFEST_FILES: [&str; 6] = [
    "package.json",
    "requirements.txt",
    "setup.py",
    "pyproject.toml",
    "Makefile",
    ".editorconfig",
];

lazy_static! {
    static ref SNAKE_CASE_FILE: Regex = Regex::new(r"^[a-z][a-z0-9_]*\.(py|js)$").unwrap();
}

/// additive maintainability points, capped at 100
pub fn calculate_maintainability_score(tree: &PatternTree) -> f64 {
    let mut score: f64 = 0.0;

    let has_structure = ["src", "lib", "scripts"]
        .iter()
        .any(|dir| tree.root.join(dir).exists());
    if has_structure {
        score += 20.0;
    }

    if tree.root.join(".gitignore").exists() {
        score += 10.0;
    }
    if tree.root.join("CHANGELOG.md").exists() {
        score += 15.0;
    }

    for manifest in MANIFEST_FILES {
        if tree.root.join(manifest).exists() {
            score += 5.0;
        }
    }

    let code_files = tree.code_files();
    if !code_files.is_empty() {
        let consistent_naming = code_files
            .iter()
            .all(|f| SNAKE_CASE_FILE.is_match(&f.file_name));
        if consistent_naming {
            score += 10.0;
        }

        // prefer many small files over a few sprawling ones
        let mut large_files = 0usize;
        for file in &code_files {
            if let Ok(content) = utils::read_text_tolerant(&file.path) {
                if utils::total_lines(&content) > 300 {
                    large_files += 1;
                }
            }
        }

        let large_ratio = large_files as f64 / code_files.len() as f64;
        if large_ratio < 0.2 {
            score += 15.0;
        } else if large_ratio < 0.5 {
            score += 10.0;
        }
    }

    score.min(100.0)
}
