//! Analyzer thresholds

use matchcoach_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every number the analyzer compares telemetry against
///
/// Participation thresholds are percentages (0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerThresholds {
    /// KDA at or above this is an excellent-KDA highlight
    pub kda_excellent: f64,

    /// KDA at or above this is a good-KDA highlight; below it, a mistake
    pub kda_good: f64,

    /// Participation at or above this is a highlight
    pub participation_high: f64,

    /// Participation at or above this earns a suggestion; below it, a mistake
    pub participation_average: f64,

    /// Deaths strictly above this are a mistake
    pub max_deaths: u32,

    /// Damage strictly above this is a highlight
    pub high_damage: u64,

    /// Overall rating cascade
    pub rating: RatingCascade,
}

impl Default for AnalyzerThresholds {
    fn default() -> Self {
        Self {
            kda_excellent: 5.0,
            kda_good: 3.0,
            participation_high: 70.0,
            participation_average: 50.0,
            max_deaths: 8,
            high_damage: 100_000,
            rating: RatingCascade::default(),
        }
    }
}

/// Minimum KDA and participation for one rating tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingFloor {
    pub kda: f64,
    pub participation: f64,
}

impl RatingFloor {
    pub fn new(kda: f64, participation: f64) -> Self {
        Self { kda, participation }
    }

    /// Both minimums are met
    pub fn admits(&self, kda: f64, participation: f64) -> bool {
        kda >= self.kda && participation >= self.participation
    }
}

/// Floors checked top to bottom; the first one admitted decides the rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingCascade {
    pub excellent: RatingFloor,
    pub good: RatingFloor,
    pub fair: RatingFloor,
}

impl Default for RatingCascade {
    fn default() -> Self {
        Self {
            excellent: RatingFloor::new(4.0, 60.0),
            good: RatingFloor::new(2.5, 40.0),
            fair: RatingFloor::new(1.5, 30.0),
        }
    }
}

impl AnalyzerThresholds {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read analyzer thresholds {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Check that each cascade is ordered from strict to lenient
    pub fn validate(&self) -> Result<()> {
        if self.kda_good > self.kda_excellent {
            return Err(Error::config("kda_good must not exceed kda_excellent"));
        }
        if self.participation_average > self.participation_high {
            return Err(Error::config(
                "participation_average must not exceed participation_high",
            ));
        }

        let values = [
            self.kda_excellent,
            self.kda_good,
            self.participation_high,
            self.participation_average,
            self.rating.excellent.kda,
            self.rating.excellent.participation,
            self.rating.good.kda,
            self.rating.good.participation,
            self.rating.fair.kda,
            self.rating.fair.participation,
        ];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(Error::config("thresholds must be finite and non-negative"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let thresholds = AnalyzerThresholds::default();
        thresholds.validate().unwrap();

        assert_eq!(thresholds.kda_excellent, 5.0);
        assert_eq!(thresholds.max_deaths, 8);
        assert_eq!(thresholds.rating.excellent, RatingFloor::new(4.0, 60.0));
    }

    #[test]
    fn test_partial_yaml_override() {
        let yaml = r#"
participation_high: 0.7
participation_average: 0.5
rating:
  excellent:
    kda: 4.5
    participation: 0.6
"#;

        let thresholds = AnalyzerThresholds::from_yaml(yaml).unwrap();
        thresholds.validate().unwrap();

        assert_eq!(thresholds.participation_high, 0.7);
        assert_eq!(thresholds.kda_good, 3.0);
        assert_eq!(thresholds.rating.excellent, RatingFloor::new(4.5, 0.6));
        assert_eq!(thresholds.rating.fair, RatingFloor::new(1.5, 30.0));
    }

    #[test]
    fn test_validate_rejects_inverted_cascade() {
        let thresholds = AnalyzerThresholds {
            kda_good: 6.0,
            ..AnalyzerThresholds::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_unreadable_file_is_config_error() {
        let err = AnalyzerThresholds::from_file("/nonexistent/thresholds.yaml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rating_floor_is_inclusive() {
        let floor = RatingFloor::new(4.0, 60.0);
        assert!(floor.admits(4.0, 60.0));
        assert!(!floor.admits(3.999, 60.0));
        assert!(!floor.admits(4.0, 59.9));
    }
}
