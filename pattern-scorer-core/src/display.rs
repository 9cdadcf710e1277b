// report rendering: fixed-width table, raw JSON, grade summary

use crate::scoring::QualityMetrics;
use crate::snapshot::ScoreMap;
use crate::utils::truncate_with_ellipsis;
use clap::ValueEnum;
use std::fmt::Write;

/// output format for the score report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Summary,
}

/// fixed grade ordering used by the summary distribution
const GRADE_ORDER: [&str; 10] = ["A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "F"];

const TABLE_WIDTH: usize = 80;

/// map the quality glyph to a terminal-safe tag for fixed-width rows
fn emoji_tag(emoji: &str) -> &'static str {
    match emoji {
        "🏆" => "[A+]",
        "⭐" => "[A ]",
        "✅" => "[B+]",
        "⚠️" => "[C ]",
        "❌" => "[F ]",
        _ => "[?]",
    }
}

/// render the score map in the requested format
pub fn render(scores: &ScoreMap, format: OutputFormat) -> String {
    if scores.is_empty() {
        return "no pattern scores available".to_string();
    }

    match format {
        OutputFormat::Table => render_table(scores),
        OutputFormat::Json => render_json(scores),
        OutputFormat::Summary => render_summary(scores),
    }
}

fn sorted_by_score(scores: &ScoreMap) -> Vec<(&String, &QualityMetrics)> {
    let mut sorted: Vec<(&String, &QualityMetrics)> = scores.iter().collect();
    sorted.sort_by(|a, b| {
        b.1.overall_score()
            .partial_cmp(&a.1.overall_score())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted
}

fn render_table(scores: &ScoreMap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(TABLE_WIDTH));
    let _ = writeln!(out, "PATTERN QUALITY SCORES");
    let _ = writeln!(out, "{}", "=".repeat(TABLE_WIDTH));
    let _ = writeln!(
        out,
        "{:<20} {:<9} {:<6} {:<6} {:<6} {:<8} {:<12}",
        "Pattern", "Grade", "Score", "Tests", "Docs", "Security", "Last Updated"
    );
    let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));

    for (name, metrics) in sorted_by_score(scores) {
        let last_updated = if metrics.last_updated.is_empty() {
            "Unknown".to_string()
        } else {
            metrics.last_updated.chars().take(10).collect()
        };

        let _ = writeln!(
            out,
            "{:<20} {} {:<4} {:>5.1} {:>5.1} {:>5.1} {:>7.1} {:<12}",
            truncate_with_ellipsis(name, 20),
            emoji_tag(metrics.emoji()),
            metrics.grade(),
            metrics.overall_score(),
            metrics.test_coverage,
            metrics.documentation_score,
            metrics.security_score,
            last_updated
        );
    }

    let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));

    let average = average_score(scores);
    let high_quality = scores
        .values()
        .filter(|m| m.overall_score() >= 80.0)
        .count();
    let _ = writeln!(out, "\nSummary: {} patterns analyzed", scores.len());
    let _ = writeln!(out, "Average quality score: {average:.1}");
    let _ = write!(
        out,
        "High quality patterns (>=80): {}/{}",
        high_quality,
        scores.len()
    );

    out
}

fn render_json(scores: &ScoreMap) -> String {
    serde_json::to_string_pretty(scores).unwrap_or_else(|_| "{}".to_string())
}

fn render_summary(scores: &ScoreMap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "PATTERN QUALITY SUMMARY");
    let _ = writeln!(out, "Total patterns: {}", scores.len());
    let _ = writeln!(out, "Average score: {:.1}", average_score(scores));
    let _ = write!(out, "\nGrade distribution:");

    for grade in GRADE_ORDER {
        let count = scores.values().filter(|m| m.grade() == grade).count();
        if count > 0 {
            let _ = write!(out, "\n  {grade}: {count} patterns");
        }
    }

    out
}

fn average_score(scores: &ScoreMap) -> f64 {
    let total: f64 = scores.values().map(|m| m.overall_score()).sum();
    total / scores.len() as f64
}
