// scoring module - organises the sub-score calculators into submodules

pub mod complexity;
pub mod coverage;
pub mod docs;
pub mod freshness;
pub mod maintainability;
pub mod metrics;
pub mod security;

// re-export key public items for convenient access
pub use complexity::calculate_complexity_score;
pub use coverage::calculate_test_coverage;
pub use docs::calculate_documentation_score;
pub use maintainability::calculate_maintainability_score;
pub use metrics::QualityMetrics;
pub use security::calculate_security_score;

use crate::fs_scan;
use anyhow::Result;
use console::style;
use std::path::Path;

/// analyse a single pattern directory
///
/// any failure is caught here: the pattern still appears in the output with
/// the zero-value record, and a tagged diagnostic goes to stderr; the batch
/// never aborts for one broken pattern
pub fn analyze_pattern(project_root: &Path, name: &str, pattern_root: &Path) -> QualityMetrics {
    match try_analyze_pattern(project_root, name, pattern_root) {
        Ok(metrics) => metrics,
        Err(e) => {
            eprintln!(
                "{} {}: {}",
                style("⚠️  failed to analyse pattern").yellow().bold(),
                style(name).yellow(),
                style(e).yellow()
            );
            QualityMetrics::default()
        }
    }
}

fn try_analyze_pattern(
    project_root: &Path,
    name: &str,
    pattern_root: &Path,
) -> Result<QualityMetrics> {
    let tree = fs_scan::load_pattern_tree(name, pattern_root)?;

    Ok(QualityMetrics {
        test_coverage: coverage::calculate_test_coverage(project_root, &tree),
        documentation_score: docs::calculate_documentation_score(&tree),
        complexity_score: complexity::calculate_complexity_score(&tree),
        security_score: security::calculate_security_score(&tree),
        maintainability_score: maintainability::calculate_maintainability_score(&tree),
        usage_frequency: freshness::usage_frequency(pattern_root),
        last_updated: freshness::last_updated(project_root, pattern_root),
    })
}
