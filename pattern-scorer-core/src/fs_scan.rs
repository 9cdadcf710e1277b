use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// name of the directory holding pattern templates under the project root
pub const TEMPLATES_DIR: &str = "templates";

/// directories that never hold pattern evidence
const PRUNED_DIRS: [&str; 3] = [".git", "node_modules", "__pycache__"];

/// a pattern directory discovered under the templates root
#[derive(Debug, Clone)]
pub struct PatternCandidate {
    pub name: String,
    pub root: PathBuf,
}

/// a file discovered inside a pattern directory
#[derive(Debug, Clone)]
pub struct TreeFile {
    pub path: PathBuf,
    pub rel: String,
    pub file_name: String,
    pub kind: FileKind,
}

/// categorize files by the kind of evidence they provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Python,
    JavaScript,
    Shell,
    Markdown,
    Other,
}

/// the recursively collected view of one pattern directory
#[derive(Debug, Clone)]
pub struct PatternTree {
    pub name: String,
    pub root: PathBuf,
    pub files: Vec<TreeFile>,
}

impl PatternTree {
    /// files providing code evidence (complexity, naming, file-size checks)
    pub fn code_files(&self) -> Vec<&TreeFile> {
        self.files
            .iter()
            .filter(|f| matches!(f.kind, FileKind::Python | FileKind::JavaScript))
            .collect()
    }

    /// files scanned for comment ratios and security anti-patterns
    pub fn script_files(&self) -> Vec<&TreeFile> {
        self.files
            .iter()
            .filter(|f| {
                matches!(
                    f.kind,
                    FileKind::Python | FileKind::JavaScript | FileKind::Shell
                )
            })
            .collect()
    }

    /// root-level readme files, lexicographically ordered
    pub fn readme_files(&self) -> Vec<&TreeFile> {
        self.files
            .iter()
            .filter(|f| {
                !f.rel.contains('/')
                    && f.file_name.starts_with("README")
                    && f.file_name.ends_with(".md")
            })
            .collect()
    }
}

/// resolve the directory a named pattern would live in
pub fn pattern_dir(project_root: &Path, name: &str) -> PathBuf {
    project_root.join(TEMPLATES_DIR).join(name)
}

/// list pattern candidates under the templates root
///
/// a missing templates directory is a configuration error and aborts the
/// whole scoring run, never a silent empty result
pub fn discover_patterns(project_root: &Path) -> Result<Vec<PatternCandidate>> {
    let templates_root = project_root.join(TEMPLATES_DIR);
    if !templates_root.is_dir() {
        return Err(anyhow::anyhow!(
            "templates directory not found at {}",
            templates_root.display()
        ));
    }

    let entries = fs::read_dir(&templates_root)
        .with_context(|| format!("failed to list {}", templates_root.display()))?;

    let mut candidates = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        candidates.push(PatternCandidate {
            name: entry.file_name().to_string_lossy().to_string(),
            root: path,
        });
    }

    // stable order keeps runs and reports deterministic
    candidates.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(candidates)
}

/// collect a pattern's file tree
pub fn load_pattern_tree(name: &str, root: &Path) -> Result<PatternTree> {
    if !root.is_dir() {
        return Err(anyhow::anyhow!(
            "pattern directory not found at {}",
            root.display()
        ));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            let file_name = e.file_name().to_string_lossy();
            e.depth() == 0 || !PRUNED_DIRS.contains(&file_name.as_ref())
        });

    for entry in walker {
        // unreadable entries stop being evidence, they never abort the scan
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .to_string();

        files.push(TreeFile {
            path: entry.path().to_path_buf(),
            kind: classify_file_kind(&file_name),
            rel,
            file_name,
        });
    }

    files.sort_by(|a, b| a.rel.cmp(&b.rel));

    Ok(PatternTree {
        name: name.to_string(),
        root: root.to_path_buf(),
        files,
    })
}

/// classify a file by extension
///
/// matching is case-sensitive: `FOO.PY` is not python evidence, the same
/// way a `*.py` glob would not pick it up
fn classify_file_kind(file_name: &str) -> FileKind {
    if file_name.ends_with(".py") {
        FileKind::Python
    } else if file_name.ends_with(".js") {
        FileKind::JavaScript
    } else if file_name.ends_with(".sh") {
        FileKind::Shell
    } else if file_name.ends_with(".md") {
        FileKind::Markdown
    } else {
        FileKind::Other
    }
}
