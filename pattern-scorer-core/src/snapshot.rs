// snapshot persistence: one JSON file, overwritten wholesale per scoring run

use crate::scoring::QualityMetrics;
use anyhow::{Context, Result};
use console::style;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// scores keyed by pattern directory name
pub type ScoreMap = BTreeMap<String, QualityMetrics>;

/// snapshot filename, fixed relative to the project root
pub const SNAPSHOT_FILE: &str = ".pattern-scores.json";

pub fn snapshot_path(project_root: &Path) -> PathBuf {
    project_root.join(SNAPSHOT_FILE)
}

/// overwrite the snapshot with the given scores, pretty-printed
pub fn save_scores(project_root: &Path, scores: &ScoreMap) -> Result<PathBuf> {
    let path = snapshot_path(project_root);
    let json = serde_json::to_string_pretty(scores).context("failed to serialize scores")?;
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// load the snapshot
///
/// a missing file means no scores yet; a corrupt file is reported and
/// treated the same way, never a crash
pub fn load_scores(project_root: &Path) -> ScoreMap {
    let path = snapshot_path(project_root);
    if !path.exists() {
        return ScoreMap::new();
    }

    match read_snapshot(&path) {
        Ok(scores) => scores,
        Err(e) => {
            eprintln!(
                "{} {}",
                style("⚠️  failed to load scores:").yellow().bold(),
                style(e).yellow()
            );
            ScoreMap::new()
        }
    }
}

fn read_snapshot(path: &Path) -> Result<ScoreMap> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("malformed snapshot at {}", path.display()))
}
