//! Match performance analyzer

use crate::report::ReportRenderer;
use crate::thresholds::AnalyzerThresholds;
use matchcoach_core::{AnalysisOutcome, MatchTelemetry, OverallRating, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Grades a match from its telemetry
///
/// Each metric is judged by its own threshold rule and contributes to exactly
/// one bucket; the overall rating comes from a separate cascade.
#[derive(Debug, Clone, Default)]
pub struct PerformanceAnalyzer {
    thresholds: AnalyzerThresholds,
}

/// Analysis outcome together with its rendered report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReview {
    #[serde(flatten)]
    pub outcome: AnalysisOutcome,
    pub report: String,
}

impl PerformanceAnalyzer {
    /// Create an analyzer with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom thresholds
    pub fn with_thresholds(thresholds: AnalyzerThresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// Thresholds in use
    pub fn thresholds(&self) -> &AnalyzerThresholds {
        &self.thresholds
    }

    /// Analyze one match
    pub fn analyze(&self, telemetry: &MatchTelemetry) -> AnalysisOutcome {
        let kda = telemetry.kda;
        let participation = telemetry.participation_rate;

        let mut outcome = AnalysisOutcome::new(self.rate(kda, participation));

        self.judge_kda(kda, &mut outcome);
        self.judge_participation(participation, &mut outcome);
        self.judge_deaths(telemetry.deaths, &mut outcome);
        self.judge_damage(telemetry.damage, &mut outcome);

        if !outcome.mistakes.is_empty() {
            outcome
                .suggestions
                .push("Review the mistakes above during replay to avoid repeating them".to_string());
        }

        debug!(
            subject = %telemetry.subject_name,
            rating = %outcome.overall_rating,
            highlights = outcome.highlights.len(),
            mistakes = outcome.mistakes.len(),
            suggestions = outcome.suggestions.len(),
            "Match analyzed"
        );

        outcome
    }

    /// Analyze one match and render its report
    pub fn review(&self, telemetry: &MatchTelemetry) -> MatchReview {
        let outcome = self.analyze(telemetry);
        let report = ReportRenderer::new().render(telemetry, &outcome);
        MatchReview { outcome, report }
    }

    /// Overall rating; first admitted floor wins
    pub fn rate(&self, kda: f64, participation: f64) -> OverallRating {
        let cascade = &self.thresholds.rating;

        if cascade.excellent.admits(kda, participation) {
            OverallRating::Excellent
        } else if cascade.good.admits(kda, participation) {
            OverallRating::Good
        } else if cascade.fair.admits(kda, participation) {
            OverallRating::Fair
        } else {
            OverallRating::NeedsImprovement
        }
    }

    fn judge_kda(&self, kda: f64, outcome: &mut AnalysisOutcome) {
        if kda >= self.thresholds.kda_excellent {
            outcome
                .highlights
                .push(format!("Excellent KDA ({:.1}): kills and survival well balanced", kda));
        } else if kda >= self.thresholds.kda_good {
            outcome
                .highlights
                .push(format!("Good KDA ({:.1}): steady overall performance", kda));
        } else {
            outcome
                .mistakes
                .push(format!("Low KDA ({:.1}): work on staying alive", kda));
        }
    }

    fn judge_participation(&self, participation: f64, outcome: &mut AnalysisOutcome) {
        if participation >= self.thresholds.participation_high {
            outcome.highlights.push(format!(
                "High participation ({:.1}%): active in team fights",
                participation
            ));
        } else if participation >= self.thresholds.participation_average {
            outcome.suggestions.push(format!(
                "Average participation ({:.1}%): join more team fights",
                participation
            ));
        } else {
            outcome.mistakes.push(format!(
                "Low participation ({:.1}%): not contributing enough to the team",
                participation
            ));
            outcome
                .suggestions
                .push("Join more team fights and support teammates in time".to_string());
        }
    }

    fn judge_deaths(&self, deaths: u32, outcome: &mut AnalysisOutcome) {
        if deaths > self.thresholds.max_deaths {
            outcome
                .mistakes
                .push(format!("Too many deaths ({}): watch your positioning", deaths));
            outcome
                .suggestions
                .push("Improve positioning awareness to avoid getting ganked".to_string());
        }
    }

    fn judge_damage(&self, damage: u64, outcome: &mut AnalysisOutcome) {
        if damage > self.thresholds.high_damage {
            outcome
                .highlights
                .push(format!("High damage output ({}): strong farming", damage));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn telemetry(kda: f64, participation: f64) -> MatchTelemetry {
        MatchTelemetry {
            subject_name: "Marco Polo".to_string(),
            position: "marksman".to_string(),
            kda,
            participation_rate: participation,
            ..MatchTelemetry::default()
        }
    }

    #[test]
    fn test_kda_boundaries() {
        let analyzer = PerformanceAnalyzer::new();

        let outcome = analyzer.analyze(&telemetry(5.0, 75.0));
        assert!(outcome.highlights[0].starts_with("Excellent KDA (5.0)"));

        let outcome = analyzer.analyze(&telemetry(3.0, 75.0));
        assert!(outcome.highlights[0].starts_with("Good KDA (3.0)"));

        let outcome = analyzer.analyze(&telemetry(2.999, 75.0));
        assert!(outcome.mistakes[0].starts_with("Low KDA"));
        assert!(outcome.highlights.iter().all(|h| !h.contains("KDA")));
    }

    #[test]
    fn test_participation_buckets() {
        let analyzer = PerformanceAnalyzer::new();

        let outcome = analyzer.analyze(&telemetry(5.0, 70.0));
        assert_eq!(outcome.highlights[1], "High participation (70.0%): active in team fights");
        assert!(outcome.suggestions.is_empty());

        let outcome = analyzer.analyze(&telemetry(5.0, 50.0));
        assert_eq!(
            outcome.suggestions,
            vec!["Average participation (50.0%): join more team fights"]
        );
        assert!(outcome.mistakes.is_empty());

        let outcome = analyzer.analyze(&telemetry(5.0, 49.9));
        assert_eq!(outcome.mistakes.len(), 1);
        assert_eq!(
            outcome.suggestions,
            vec![
                "Join more team fights and support teammates in time",
                "Review the mistakes above during replay to avoid repeating them",
            ]
        );
    }

    #[test]
    fn test_deaths_rule_is_strict() {
        let analyzer = PerformanceAnalyzer::new();

        let mut t = telemetry(5.0, 80.0);
        t.deaths = 8;
        assert!(analyzer.analyze(&t).mistakes.is_empty());

        t.deaths = 9;
        let outcome = analyzer.analyze(&t);
        assert_eq!(outcome.mistakes, vec!["Too many deaths (9): watch your positioning"]);
        assert_eq!(
            outcome.suggestions,
            vec![
                "Improve positioning awareness to avoid getting ganked",
                "Review the mistakes above during replay to avoid repeating them",
            ]
        );
    }

    #[test]
    fn test_damage_rule_is_strict() {
        let analyzer = PerformanceAnalyzer::new();

        let mut t = telemetry(5.0, 80.0);
        t.damage = 100_000;
        assert_eq!(analyzer.analyze(&t).highlights.len(), 2);

        t.damage = 100_001;
        let outcome = analyzer.analyze(&t);
        assert_eq!(outcome.highlights[2], "High damage output (100001): strong farming");
    }

    #[test]
    fn test_rating_cascade() {
        let analyzer = PerformanceAnalyzer::new();

        assert_eq!(analyzer.rate(4.0, 60.0), OverallRating::Excellent);
        assert_eq!(analyzer.rate(3.999, 60.0), OverallRating::Good);
        assert_eq!(analyzer.rate(3.999, 39.0), OverallRating::Fair);
        assert_eq!(analyzer.rate(2.5, 40.0), OverallRating::Good);
        assert_eq!(analyzer.rate(1.5, 30.0), OverallRating::Fair);
        assert_eq!(analyzer.rate(1.49, 90.0), OverallRating::NeedsImprovement);
        assert_eq!(analyzer.rate(9.0, 29.9), OverallRating::NeedsImprovement);
    }

    #[test]
    fn test_empty_telemetry_is_fully_graded() {
        let outcome = PerformanceAnalyzer::new().analyze(&MatchTelemetry::default());

        assert_eq!(outcome.overall_rating, OverallRating::NeedsImprovement);
        assert!(outcome.highlights.is_empty());
        assert_eq!(outcome.mistakes.len(), 2);
        assert_eq!(outcome.suggestions.len(), 2);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = AnalyzerThresholds {
            max_deaths: 3,
            ..AnalyzerThresholds::default()
        };
        let analyzer = PerformanceAnalyzer::with_thresholds(thresholds).unwrap();

        let mut t = telemetry(5.0, 80.0);
        t.deaths = 4;
        assert_eq!(analyzer.analyze(&t).mistakes.len(), 1);
    }

    #[test]
    fn test_review_bundles_report() {
        let review = PerformanceAnalyzer::new().review(&telemetry(5.0, 80.0));

        assert_eq!(review.outcome.overall_rating, OverallRating::Excellent);
        assert!(review.report.starts_with("Match Review Report\n"));

        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["overall_rating"], "excellent");
        assert!(json["report"].is_string());
    }
}
