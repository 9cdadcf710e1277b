// usage telemetry placeholder and best-effort last-updated lookup

use anyhow::Result;
use chrono::{DateTime, Local};
use git2::{DiffOptions, Repository};
use std::path::{Path, PathBuf};

/// upper bound on commits examined when looking for the last touch of a
/// pattern; older history falls through to the mtime fallback
const MAX_HISTORY_WALK: usize = 500;

/// usage metrics are not wired in yet, every pattern reports zero
pub fn usage_frequency(_pattern_root: &Path) -> u64 {
    0
}

/// best-effort last-updated timestamp for a pattern directory
///
/// tries version-control history first, then the directory mtime, then the
/// current time; never fails
pub fn last_updated(project_root: &Path, pattern_root: &Path) -> String {
    if let Ok(Some(timestamp)) = last_commit_timestamp(project_root, pattern_root) {
        return timestamp;
    }

    if let Ok(metadata) = std::fs::metadata(pattern_root) {
        if let Ok(modified) = metadata.modified() {
            return DateTime::<Local>::from(modified).to_rfc3339();
        }
    }

    Local::now().to_rfc3339()
}

/// timestamp of the most recent commit touching the pattern directory
fn last_commit_timestamp(project_root: &Path, pattern_root: &Path) -> Result<Option<String>> {
    let repo = Repository::discover(project_root)?;
    let workdir = match repo.workdir() {
        Some(workdir) => workdir.to_path_buf(),
        None => return Ok(None),
    };

    let pathspec = match relative_to(&workdir, pattern_root) {
        Some(pathspec) => pathspec,
        None => return Ok(None),
    };

    let mut revwalk = repo.revwalk()?;
    revwalk.push_head()?;

    for oid in revwalk.take(MAX_HISTORY_WALK) {
        let commit = repo.find_commit(oid?)?;
        let tree = commit.tree()?;
        let parent_tree = match commit.parent(0) {
            Ok(parent) => Some(parent.tree()?),
            Err(_) => None,
        };

        let mut opts = DiffOptions::new();
        opts.pathspec(&pathspec);
        let diff = repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut opts))?;

        if diff.deltas().len() > 0 {
            let timestamp = DateTime::from_timestamp(commit.time().seconds(), 0)
                .map(|when| when.to_rfc3339());
            return Ok(timestamp);
        }
    }

    Ok(None)
}

/// express the pattern path relative to the repository work dir
fn relative_to(workdir: &Path, pattern_root: &Path) -> Option<PathBuf> {
    let canonical = pattern_root.canonicalize().ok()?;
    let workdir = workdir.canonicalize().ok()?;
    canonical
        .strip_prefix(&workdir)
        .ok()
        .map(|rel| rel.to_path_buf())
}
