//! Core types for MatchCoach

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Intent label reported when nothing in the pattern table matched
pub const UNKNOWN_INTENT: &str = "unknown";

/// Kind of entity extracted from a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A playable subject from the subject gazetteer
    SubjectName,
    /// A competitive tier from the tier gazetteer
    Tier,
}

impl EntityKind {
    /// Wire name of this entity kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SubjectName => "subject_name",
            Self::Tier => "tier",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracted entities keyed by kind
pub type Entities = BTreeMap<EntityKind, String>;

/// Result of intent recognition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    /// Intent label, `"unknown"` when nothing matched
    pub intent: String,

    /// Confidence score (0.0-1.0), zero exactly when the intent is unknown
    pub confidence: f64,

    /// Entities found in the message
    #[serde(default)]
    pub entities: Entities,
}

impl RecognitionResult {
    /// Create a new recognition result
    pub fn new(intent: impl Into<String>, confidence: f64, entities: Entities) -> Self {
        Self {
            intent: intent.into(),
            confidence,
            entities,
        }
    }

    /// The empty-handed result: unknown intent, zero confidence, no entities
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_INTENT, 0.0, Entities::new())
    }

    /// Whether no intent was recognized
    pub fn is_unknown(&self) -> bool {
        self.intent == UNKNOWN_INTENT
    }

    /// Extracted subject name, if any
    pub fn subject_name(&self) -> Option<&str> {
        self.entities.get(&EntityKind::SubjectName).map(String::as_str)
    }

    /// Extracted tier, if any
    pub fn tier(&self) -> Option<&str> {
        self.entities.get(&EntityKind::Tier).map(String::as_str)
    }
}

/// `(kills + assists) / max(deaths, 1)`
pub fn compute_kda(kills: u32, deaths: u32, assists: u32) -> f64 {
    (f64::from(kills) + f64::from(assists)) / f64::from(deaths.max(1))
}

/// Numeric scale a participation rate was recorded on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipationScale {
    /// 0-100, the analyzer's canonical unit
    #[default]
    Percent,
    /// 0.0-1.0
    Fraction,
}

impl std::str::FromStr for ParticipationScale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "percent" => Ok(Self::Percent),
            "fraction" => Ok(Self::Fraction),
            other => Err(format!("unknown participation scale '{}'", other)),
        }
    }
}

/// Gameplay telemetry for a single match
///
/// Every numeric field defaults to zero when absent from the input.
/// `participation_rate` is a percentage once the record has gone through
/// [`MatchTelemetry::normalized`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchTelemetry {
    /// Subject played in the match
    pub subject_name: String,

    /// Lane or role played
    pub position: String,

    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,

    /// Kill/death/assist ratio
    pub kda: f64,

    /// Share of team kill events the player took part in
    pub participation_rate: f64,

    /// Total damage dealt
    pub damage: u64,

    /// Match length in seconds
    pub duration: u32,
}

impl MatchTelemetry {
    /// Create telemetry for a subject and position with zeroed stats
    pub fn new(subject_name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            subject_name: subject_name.into(),
            position: position.into(),
            ..Self::default()
        }
    }

    /// Set kills, deaths and assists, deriving the KDA from them
    pub fn with_combat(mut self, kills: u32, deaths: u32, assists: u32) -> Self {
        self.kills = kills;
        self.deaths = deaths;
        self.assists = assists;
        self.kda = compute_kda(kills, deaths, assists);
        self
    }

    /// Bring an imported record into the analyzer's canonical form
    ///
    /// A fractional participation rate is scaled to a percentage, and a
    /// missing KDA is derived from the combat counts.
    pub fn normalized(mut self, scale: ParticipationScale) -> Self {
        if scale == ParticipationScale::Fraction {
            self.participation_rate *= 100.0;
        }
        if self.kda == 0.0 && (self.kills > 0 || self.assists > 0) {
            self.kda = compute_kda(self.kills, self.deaths, self.assists);
        }
        self
    }
}

/// Coarse grade for a whole match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallRating {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl OverallRating {
    /// Wire name of the rating
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::NeedsImprovement => "needs_improvement",
        }
    }
}

impl fmt::Display for OverallRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Graded assessment of a match
///
/// Each list keeps the order in which the analyzer rules fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub overall_rating: OverallRating,
    pub highlights: Vec<String>,
    pub mistakes: Vec<String>,
    pub suggestions: Vec<String>,
}

impl AnalysisOutcome {
    /// Create an outcome with empty buckets
    pub fn new(overall_rating: OverallRating) -> Self {
        Self {
            overall_rating,
            highlights: Vec::new(),
            mistakes: Vec::new(),
            suggestions: Vec::new(),
        }
    }
}

/// A chat message in a prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}

/// One prior exchange in a conversation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Turn {
    pub user_message: String,
    pub ai_response: String,
}

impl Turn {
    pub fn new(user_message: impl Into<String>, ai_response: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
            ai_response: ai_response.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_kda_guards_zero_deaths() {
        assert_eq!(compute_kda(5, 0, 3), 8.0);
        assert_eq!(compute_kda(6, 3, 6), 4.0);
        assert_eq!(compute_kda(0, 0, 0), 0.0);
    }

    #[test]
    fn test_telemetry_defaults_missing_fields() {
        let telemetry: MatchTelemetry =
            serde_json::from_str(r#"{"subject_name": "Li Bai", "kills": 4}"#).unwrap();

        assert_eq!(telemetry.subject_name, "Li Bai");
        assert_eq!(telemetry.kills, 4);
        assert_eq!(telemetry.deaths, 0);
        assert_eq!(telemetry.participation_rate, 0.0);
        assert_eq!(telemetry.damage, 0);
        assert!(telemetry.position.is_empty());
    }

    #[test]
    fn test_normalized_scales_fraction() {
        let telemetry = MatchTelemetry {
            participation_rate: 0.75,
            kda: 3.0,
            ..MatchTelemetry::default()
        }
        .normalized(ParticipationScale::Fraction);

        assert_eq!(telemetry.participation_rate, 75.0);
        assert_eq!(telemetry.kda, 3.0);
    }

    #[test]
    fn test_normalized_derives_missing_kda() {
        let telemetry = MatchTelemetry {
            kills: 3,
            deaths: 2,
            assists: 5,
            participation_rate: 62.0,
            ..MatchTelemetry::default()
        }
        .normalized(ParticipationScale::Percent);

        assert_eq!(telemetry.kda, 4.0);
        assert_eq!(telemetry.participation_rate, 62.0);
    }

    #[test]
    fn test_unknown_result() {
        let result = RecognitionResult::unknown();
        assert!(result.is_unknown());
        assert_eq!(result.confidence, 0.0);
        assert!(result.entities.is_empty());
    }

    #[test]
    fn test_entities_serialize_with_snake_case_keys() {
        let mut entities = Entities::new();
        entities.insert(EntityKind::SubjectName, "Arthur".to_string());
        entities.insert(EntityKind::Tier, "Diamond".to_string());
        let result = RecognitionResult::new("equipment", 0.85, entities);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["entities"]["subject_name"], "Arthur");
        assert_eq!(json["entities"]["tier"], "Diamond");
    }

    #[test]
    fn test_rating_wire_names() {
        let json = serde_json::to_string(&OverallRating::NeedsImprovement).unwrap();
        assert_eq!(json, "\"needs_improvement\"");
        assert_eq!(OverallRating::Excellent.to_string(), "excellent");
    }

    #[test]
    fn test_participation_scale_parse() {
        assert_eq!("fraction".parse::<ParticipationScale>(), Ok(ParticipationScale::Fraction));
        assert_eq!("Percent".parse::<ParticipationScale>(), Ok(ParticipationScale::Percent));
        assert!("ratio".parse::<ParticipationScale>().is_err());
    }
}
