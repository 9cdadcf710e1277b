// test coverage heuristic

use crate::fs_scan::PatternTree;
use crate::utils;
use std::fs;
use std::path::{Path, PathBuf};

/// score a pattern's test coverage from the line volume of its test files
///
/// test files are looked up in a fixed set of locations: the central tests
/// directory (a file named after the pattern, or a per-pattern directory),
/// then the pattern-local `tests/` directory and a pattern-local
/// `test_<name>.py`
pub fn calculate_test_coverage(project_root: &Path, tree: &PatternTree) -> f64 {
    let mut test_files: Vec<PathBuf> = Vec::new();

    let central_file = project_root
        .join("tests")
        .join(format!("test_{}.py", tree.name));
    if central_file.is_file() {
        test_files.push(central_file);
    }

    let central_dir = project_root.join("tests").join(&tree.name);
    collect_matching(&central_dir, &mut test_files, |name| {
        name.starts_with("test_") && name.ends_with(".py")
    });

    collect_matching(&tree.root.join("tests"), &mut test_files, |name| {
        name.ends_with(".py")
    });

    let local_file = tree.root.join(format!("test_{}.py", tree.name));
    if local_file.is_file() {
        test_files.push(local_file);
    }

    if test_files.is_empty() {
        return 0.0;
    }

    let mut total_test_lines = 0usize;
    for test_file in &test_files {
        // unreadable test files stop being evidence
        if let Ok(content) = utils::read_text_tolerant(test_file) {
            total_test_lines += utils::count_significant_lines(&content);
        }
    }

    // map line volume to a score through fixed breakpoints
    if total_test_lines > 100 {
        95.0
    } else if total_test_lines > 50 {
        85.0
    } else if total_test_lines > 20 {
        75.0
    } else if total_test_lines > 10 {
        60.0
    } else if total_test_lines > 0 {
        40.0
    } else {
        0.0
    }
}

/// collect files in a directory whose names satisfy the filter, sorted
fn collect_matching(dir: &Path, out: &mut Vec<PathBuf>, filter: impl Fn(&str) -> bool) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    let mut found: Vec<PathBuf> = entries
        .flatten()
        .filter(|e| e.path().is_file())
        .filter(|e| filter(&e.file_name().to_string_lossy()))
        .map(|e| e.path())
        .collect();
    found.sort();
    out.extend(found);
}
