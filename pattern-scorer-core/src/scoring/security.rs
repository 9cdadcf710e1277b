// security anti-pattern scan

use crate::fs_scan::PatternTree;
use crate::utils;
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

/// points deducted per (file, anti-pattern) hit
const PENALTY_PER_HIT: f64 = 15.0;

fn risk(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap()
}

lazy_static! {
    /// known risk markers in template code
    static ref RISK_PATTERNS: Vec<(Regex, &'static str)> = vec![
        (risk(r"eval\s*\("), "eval() usage detected"),
        (risk(r"exec\s*\("), "exec() usage detected"),
        (risk(r"shell=True"), "shell=True in subprocess"),
        (risk(r"subprocess\.call\([^)]*shell\s*=\s*True"), "dangerous subprocess call"),
        (risk(r"os\.system\s*\("), "os.system() usage"),
        (risk(r"input\s*\([^)]*\)"), "unsafe input() usage"),
        (risk(r"pickle\.loads?\s*\("), "unsafe pickle usage"),
        (risk(r"yaml\.load\s*\("), "unsafe YAML loading"),
        (risk(r#"["'].*password.*["']"#), "hardcoded password"),
        (risk(r#"["'].*api[_-]?key.*["']"#), "hardcoded API key"),
        (risk(r#"["'].*secret.*["']"#), "hardcoded secret"),
    ];
}

/// start from a perfect score, deduct per anti-pattern hit, then apply
/// hygiene bonuses and clamp
///
/// penalties accumulate unbounded below zero before the single final clamp;
/// the bonuses are applied after all deductions
pub fn calculate_security_score(tree: &PatternTree) -> f64 {
    let mut score = 100.0;

    for file in tree.script_files() {
        let content = match utils::read_text_tolerant(&file.path) {
            Ok(content) => content,
            Err(_) => continue,
        };

        for (pattern, _issue) in RISK_PATTERNS.iter() {
            if pattern.is_match(&content) {
                score -= PENALTY_PER_HIT;
            }
        }
    }

    if tree.root.join(".gitignore").exists() {
        score += 5.0;
    }

    if tree.files.iter().any(|f| f.file_name == "requirements.txt") {
        if let Ok(requirements) = utils::read_text_tolerant(&tree.root.join("requirements.txt")) {
            // exact version pins
            if requirements.contains("==") {
                score += 5.0;
            }
        }
    }

    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_scan::load_pattern_tree;
    use std::fs;
    use std::path::Path;

    fn tree_with(files: &[(&str, &str)]) -> (tempfile::TempDir, PatternTree) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("demo");
        fs::create_dir_all(&root).unwrap();
        for (rel, content) in files {
            let path = root.join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, content).unwrap();
        }
        let tree = load_pattern_tree("demo", &root).unwrap();
        (dir, tree)
    }

    #[test]
    fn clean_pattern_keeps_a_perfect_score() {
        let (_dir, tree) = tree_with(&[("main.py", "result = compute(1, 2)\n")]);
        assert_eq!(calculate_security_score(&tree), 100.0);
    }

    #[test]
    fn os_system_costs_exactly_fifteen() {
        let (_dir, tree) = tree_with(&[("main.py", "os.system(command)\n")]);
        assert_eq!(calculate_security_score(&tree), 85.0);
    }

    #[test]
    fn each_distinct_anti_pattern_costs_fifteen() {
        // eval() and os.system() in one file: two hits
        let (_dir, tree) = tree_with(&[("main.py", "eval(x)\nos.system(command)\n")]);
        assert_eq!(calculate_security_score(&tree), 70.0);
    }

    #[test]
    fn repeats_of_one_pattern_in_one_file_count_once() {
        let (_dir, tree) = tree_with(&[("main.py", "os.system(a)\nos.system(b)\n")]);
        assert_eq!(calculate_security_score(&tree), 85.0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let (_dir, tree) = tree_with(&[("main.py", "OS.SYSTEM(command)\n")]);
        assert_eq!(calculate_security_score(&tree), 85.0);
    }

    #[test]
    fn hardcoded_credentials_are_flagged() {
        let (_dir, tree) = tree_with(&[("config.js", "const token = 'my_api_key_value';\n")]);
        assert_eq!(calculate_security_score(&tree), 85.0);
    }

    #[test]
    fn gitignore_bonus_applies_after_deductions() {
        let (_dir, tree) = tree_with(&[("main.py", "os.system(command)\n"), (".gitignore", "*.log\n")]);
        assert_eq!(calculate_security_score(&tree), 90.0);
    }

    #[test]
    fn bonus_cannot_push_past_one_hundred() {
        let (_dir, tree) = tree_with(&[("main.py", "x = 1\n"), (".gitignore", "*.log\n")]);
        assert_eq!(calculate_security_score(&tree), 100.0);
    }

    #[test]
    fn pinned_requirements_earn_a_bonus() {
        let (_dir, tree) = tree_with(&[
            ("main.py", "os.system(command)\n"),
            ("requirements.txt", "requests==2.31.0\n"),
        ]);
        assert_eq!(calculate_security_score(&tree), 90.0);
    }

    #[test]
    fn unpinned_requirements_earn_nothing() {
        let (_dir, tree) = tree_with(&[
            ("main.py", "os.system(command)\n"),
            ("requirements.txt", "requests>=2.0\n"),
        ]);
        assert_eq!(calculate_security_score(&tree), 85.0);
    }

    #[test]
    fn penalties_accumulate_unbounded_before_the_final_clamp() {
        // eight distinct anti-patterns drive the raw score to -20 before clamping;
        // the +5 gitignore bonus lands before the clamp and still yields zero
        let hot = "eval(x)\nexec(y)\nos.system(z)\npickle.loads(d)\nyaml.load(f)\ninput(prompt)\nsubprocess.call(cmd, shell=True)\n";
        let (_dir, tree) = tree_with(&[("main.py", hot), (".gitignore", "*.log\n")]);
        assert_eq!(calculate_security_score(&tree), 0.0);
    }

    #[test]
    fn shell_scripts_are_scanned() {
        let (_dir, tree) = tree_with(&[("run.sh", "echo \"default password here\"\n")]);
        assert_eq!(calculate_security_score(&tree), 85.0);
    }

    #[test]
    fn non_script_files_are_not_scanned() {
        let (_dir, tree) = tree_with(&[("notes.md", "avoid eval( in templates\n")]);
        assert_eq!(calculate_security_score(&tree), 100.0);
    }

    #[test]
    fn requirements_read_failure_is_tolerated() {
        // requirements.txt nested but absent at the root: no bonus, no error
        let (_dir, tree) = tree_with(&[
            ("vendor/requirements.txt", "requests==2.31.0\n"),
            ("main.py", "x = 1\n"),
        ]);
        assert_eq!(calculate_security_score(&tree), 100.0);
    }

    #[test]
    fn baseline_reduction_matches_the_penalty_constant() {
        let clean = tree_with(&[("main.py", "value = 1\n")]);
        let flagged = tree_with(&[("main.py", "value = 1\nos.system(cmd)\n")]);
        assert_eq!(
            calculate_security_score(&clean.1) - calculate_security_score(&flagged.1),
            PENALTY_PER_HIT
        );
    }

    #[test]
    fn unreadable_file_is_skipped() {
        let (_dir, tree) = tree_with(&[("main.py", "x = 1\n")]);
        // construct a tree entry pointing at a file that no longer exists
        let mut broken = tree.clone();
        broken.files[0].path = Path::new("/no/such/file.py").to_path_buf();
        assert_eq!(calculate_security_score(&broken), 100.0);
    }
}
