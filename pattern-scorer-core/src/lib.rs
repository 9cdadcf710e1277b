// pattern-scorer-core/src/lib.rs

// declare modules
pub mod display;
pub mod fs_scan;
pub mod scoring;
pub mod snapshot;
pub mod utils;

// re-export key structs/functions for external use by other crates
pub use anyhow::{Context, Result};
pub use clap::Parser;
pub use console::style;

pub use crate::display::{render, OutputFormat};
pub use crate::fs_scan::{discover_patterns, pattern_dir, PatternCandidate, PatternTree};
pub use crate::scoring::{analyze_pattern, QualityMetrics};
pub use crate::snapshot::{load_scores, save_scores, snapshot_path, ScoreMap};

use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// argument parsing struct shared by the CLI binary
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pattern-scorer",
    about = "heuristic quality scoring for pattern template directories"
)]
pub struct CoreCliArgs {
    /// project root containing the templates directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub project_root: String,

    /// output format for the score report
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// recompute scores and persist the snapshot
    #[arg(long)]
    pub score: bool,

    /// display the previously saved snapshot without rescoring
    #[arg(long)]
    pub show: bool,

    /// restrict scoring to a single named pattern
    #[arg(long)]
    pub pattern: Option<String>,

    /// print each pattern's sub-scores while analysing
    #[arg(short, long)]
    pub verbose: bool,
}

/// the core scoring and display flow
pub fn execute_scorer_flow(args: CoreCliArgs) -> Result<()> {
    let project_root = PathBuf::from(&args.project_root);
    // keep stdout clean for piping when the report itself is JSON
    let decorated = args.format != OutputFormat::Json;

    if decorated {
        println!("{}", style("\npattern-scorer 📐").cyan().bold());
        println!(
            "{}\n",
            style("heuristic quality scoring for pattern templates").dim()
        );
    }

    if args.score {
        let scores = if let Some(name) = &args.pattern {
            // single-pattern runs display without touching the snapshot
            let metrics = score_single_pattern(&project_root, name, args.verbose)?;
            let mut scores = ScoreMap::new();
            scores.insert(name.clone(), metrics);
            scores
        } else {
            let scores = score_all_patterns(&project_root, args.verbose)?;
            let path = save_scores(&project_root, &scores)?;
            if decorated {
                println!(
                    "{} {}",
                    style("✅ scores saved to").green().bold(),
                    style(path.display()).green()
                );
            }
            scores
        };
        println!("{}", render(&scores, args.format));
        return Ok(());
    }

    if args.show {
        let scores = load_scores(&project_root);
        println!("{}", render(&scores, args.format));
        return Ok(());
    }

    // default: reuse the snapshot when one exists, otherwise score fresh
    let mut scores = load_scores(&project_root);
    if scores.is_empty() {
        if decorated {
            println!(
                "{}",
                style("no existing scores found, scoring patterns...").cyan()
            );
        }
        scores = score_all_patterns(&project_root, args.verbose)?;
        let path = save_scores(&project_root, &scores)?;
        if decorated {
            println!(
                "{} {}",
                style("✅ scores saved to").green().bold(),
                style(path.display()).green()
            );
        }
    }
    println!("{}", render(&scores, args.format));
    Ok(())
}

/// score every pattern under the templates root
pub fn score_all_patterns(project_root: &Path, verbose: bool) -> Result<ScoreMap> {
    let candidates = discover_patterns(project_root)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(120));

    let mut scores = ScoreMap::new();
    for candidate in candidates {
        spinner.set_message(format!("analysing {}...", candidate.name));
        let metrics = analyze_pattern(project_root, &candidate.name, &candidate.root);
        if verbose {
            spinner.suspend(|| print_sub_scores(&candidate.name, &metrics));
        }
        scores.insert(candidate.name, metrics);
    }
    spinner.finish_and_clear();

    Ok(scores)
}

/// score one named pattern, erroring clearly if it does not exist
pub fn score_single_pattern(project_root: &Path, name: &str, verbose: bool) -> Result<QualityMetrics> {
    let pattern_root = pattern_dir(project_root, name);
    if !pattern_root.is_dir() {
        return Err(anyhow::anyhow!("pattern not found: {name}"));
    }

    let metrics = analyze_pattern(project_root, name, &pattern_root);
    if verbose {
        print_sub_scores(name, &metrics);
    }
    Ok(metrics)
}

fn print_sub_scores(name: &str, metrics: &QualityMetrics) {
    println!("{}", style(format!("{name}:")).cyan().bold());
    println!(
        "  tests {:.1}  docs {:.1}  complexity {:.1}  security {:.1}  maintainability {:.1}",
        metrics.test_coverage,
        metrics.documentation_score,
        metrics.complexity_score,
        metrics.security_score,
        metrics.maintainability_score
    );
}
