//! MatchCoach Analysis
//!
//! Turns match telemetry into a graded assessment and a text report.
//!
//! The analyzer applies independent threshold rules per metric:
//! - KDA and participation each land in exactly one bucket
//! - Deaths and damage only fire past their limits
//! - An overall rating comes from a top-down cascade over KDA and participation
//!
//! Participation rates are percentages; convert fractional imports with
//! [`matchcoach_core::MatchTelemetry::normalized`] first.

pub mod engine;
pub mod report;
pub mod thresholds;
pub mod tips;

pub use engine::{MatchReview, PerformanceAnalyzer};
pub use report::ReportRenderer;
pub use thresholds::{AnalyzerThresholds, RatingCascade, RatingFloor};
pub use tips::{coaching_tips, CoachingTips};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::engine::{MatchReview, PerformanceAnalyzer};
    pub use crate::report::ReportRenderer;
    pub use crate::thresholds::AnalyzerThresholds;
    pub use matchcoach_core::{AnalysisOutcome, MatchTelemetry, OverallRating};
}
