// quality metrics record and its derived fields

use serde::{Deserialize, Serialize};

// fixed weighting policy for the overall score; not configurable at run time
const WEIGHT_TEST_COVERAGE: f64 = 0.25;
const WEIGHT_DOCUMENTATION: f64 = 0.20;
const WEIGHT_COMPLEXITY: f64 = 0.15;
const WEIGHT_SECURITY: f64 = 0.25;
const WEIGHT_MAINTAINABILITY: f64 = 0.15;

/// quality metrics for a single pattern
///
/// only the seven stored fields are persisted; `overall_score`, `grade` and
/// `emoji` are recomputed on every read so they can never drift out of sync
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    #[serde(default)]
    pub test_coverage: f64,
    #[serde(default)]
    pub documentation_score: f64,
    #[serde(default)]
    pub complexity_score: f64,
    #[serde(default)]
    pub security_score: f64,
    #[serde(default)]
    pub maintainability_score: f64,
    #[serde(default)]
    pub usage_frequency: u64,
    #[serde(default)]
    pub last_updated: String,
}

impl QualityMetrics {
    /// weighted overall score, clamped to [0, 100]
    pub fn overall_score(&self) -> f64 {
        let score = self.test_coverage * WEIGHT_TEST_COVERAGE
            + self.documentation_score * WEIGHT_DOCUMENTATION
            // lower complexity is better, so it enters inverted
            + (100.0 - self.complexity_score) * WEIGHT_COMPLEXITY
            + self.security_score * WEIGHT_SECURITY
            + self.maintainability_score * WEIGHT_MAINTAINABILITY;

        score.clamp(0.0, 100.0)
    }

    /// letter grade bucket, inclusive at each lower bound
    pub fn grade(&self) -> &'static str {
        let score = self.overall_score();
        if score >= 90.0 {
            "A+"
        } else if score >= 85.0 {
            "A"
        } else if score >= 80.0 {
            "A-"
        } else if score >= 75.0 {
            "B+"
        } else if score >= 70.0 {
            "B"
        } else if score >= 65.0 {
            "B-"
        } else if score >= 60.0 {
            "C+"
        } else if score >= 55.0 {
            "C"
        } else if score >= 50.0 {
            "C-"
        } else {
            "F"
        }
    }

    /// glyph representation of quality
    pub fn emoji(&self) -> &'static str {
        let score = self.overall_score();
        if score >= 90.0 {
            "🏆"
        } else if score >= 80.0 {
            "⭐"
        } else if score >= 70.0 {
            "✅"
        } else if score >= 60.0 {
            "⚠️"
        } else {
            "❌"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(score: f64) -> QualityMetrics {
        QualityMetrics {
            test_coverage: score,
            documentation_score: score,
            // complexity is inverted in the weighting, so feed its complement
            complexity_score: 100.0 - score,
            security_score: score,
            maintainability_score: score,
            ..QualityMetrics::default()
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let total = WEIGHT_TEST_COVERAGE
            + WEIGHT_DOCUMENTATION
            + WEIGHT_COMPLEXITY
            + WEIGHT_SECURITY
            + WEIGHT_MAINTAINABILITY;
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn overall_matches_weighted_formula() {
        let metrics = QualityMetrics {
            test_coverage: 85.0,
            documentation_score: 50.0,
            complexity_score: 10.0,
            security_score: 100.0,
            maintainability_score: 35.0,
            ..QualityMetrics::default()
        };
        let expected = 85.0 * 0.25 + 50.0 * 0.20 + 90.0 * 0.15 + 100.0 * 0.25 + 35.0 * 0.15;
        assert!((metrics.overall_score() - expected).abs() < 1e-9);
    }

    #[test]
    fn overall_is_bounded() {
        assert_eq!(uniform(0.0).overall_score(), 0.0);
        assert_eq!(uniform(100.0).overall_score(), 100.0);
    }

    #[test]
    fn grade_boundaries_are_inclusive_at_lower_edge() {
        let cases = [
            (90.0, "A+"),
            (89.9, "A"),
            (85.0, "A"),
            (80.0, "A-"),
            (75.0, "B+"),
            (70.0, "B"),
            (65.0, "B-"),
            (60.0, "C+"),
            (55.0, "C"),
            (50.0, "C-"),
            (49.9, "F"),
            (0.0, "F"),
        ];
        for (score, expected) in cases {
            assert_eq!(uniform(score).grade(), expected, "score {score}");
        }
    }

    #[test]
    fn every_score_lands_in_exactly_one_grade() {
        let all = ["A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "F"];
        for tenth in 0..=1000 {
            let metrics = uniform(tenth as f64 / 10.0);
            let grade = metrics.grade();
            assert_eq!(all.iter().filter(|&&g| g == grade).count(), 1);
        }
    }

    #[test]
    fn emoji_tracks_score_tiers() {
        assert_eq!(uniform(95.0).emoji(), "🏆");
        assert_eq!(uniform(80.0).emoji(), "⭐");
        assert_eq!(uniform(70.0).emoji(), "✅");
        assert_eq!(uniform(60.0).emoji(), "⚠️");
        assert_eq!(uniform(10.0).emoji(), "❌");
    }

    #[test]
    fn zero_value_record_grades_f() {
        let metrics = QualityMetrics::default();
        // a zeroed record still earns the inverted complexity weight
        assert_eq!(metrics.overall_score(), 15.0);
        assert_eq!(metrics.grade(), "F");
    }
}
