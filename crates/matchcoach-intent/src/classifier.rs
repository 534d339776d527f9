//! Rule-based intent classifier

use crate::config::{ConfidenceSpec, IntentConfig};
use crate::entities::EntityExtractor;
use crate::patterns::{KeywordSet, PatternTable};
use matchcoach_core::{EntityKind, RecognitionResult, Result};
use tracing::{debug, info};

/// Confidence scoring shared by every intent
///
/// The boost keywords are checked against the whole message, independent of
/// which intent matched.
pub struct ConfidenceScorer {
    base: f64,
    explicit: Option<KeywordSet>,
    explicit_boost: f64,
    detail: Option<KeywordSet>,
    detail_boost: f64,
    max: f64,
}

impl ConfidenceScorer {
    /// Build a scorer from its specification
    pub fn new(spec: &ConfidenceSpec) -> Result<Self> {
        Ok(Self {
            base: spec.base,
            explicit: KeywordSet::new(&spec.explicit_request_keywords)?,
            explicit_boost: spec.explicit_request_boost,
            detail: KeywordSet::new(&spec.detail_request_keywords)?,
            detail_boost: spec.detail_request_boost,
            max: spec.max,
        })
    }

    /// Confidence for a message that hit at least one intent
    pub fn score(&self, text: &str) -> f64 {
        let mut confidence = self.base;

        if self.explicit.as_ref().is_some_and(|k| k.is_match(text)) {
            confidence += self.explicit_boost;
        }
        if self.detail.as_ref().is_some_and(|k| k.is_match(text)) {
            confidence += self.detail_boost;
        }

        confidence.min(self.max)
    }
}

/// Classifies player messages into intents
///
/// Construction compiles every table once; `recognize` is then a pure
/// function of the message and safe to call from many threads.
pub struct IntentClassifier {
    table: PatternTable,
    extractor: EntityExtractor,
    scorer: ConfidenceScorer,
    fallback_intent: String,
    fallback_confidence: f64,
}

impl IntentClassifier {
    /// Create a classifier with the built-in catalog
    pub fn new() -> Result<Self> {
        Self::from_config(&IntentConfig::default())
    }

    /// Create a classifier from explicit configuration
    pub fn from_config(config: &IntentConfig) -> Result<Self> {
        config.validate()?;

        let table = PatternTable::compile(&config.intents)?;
        let extractor = EntityExtractor::new(config.subject_names.clone(), &config.tiers)?;
        let scorer = ConfidenceScorer::new(&config.confidence)?;

        info!(
            intents = table.len(),
            subjects = config.subject_names.len(),
            tiers = config.tiers.len(),
            "Intent classifier compiled"
        );

        Ok(Self {
            table,
            extractor,
            scorer,
            fallback_intent: config.fallback_intent.clone(),
            fallback_confidence: config.fallback_confidence,
        })
    }

    /// Recognize the intent of a message
    pub fn recognize(&self, message: &str) -> RecognitionResult {
        let message = message.trim();

        if message.is_empty() {
            return RecognitionResult::unknown();
        }

        let entities = self.extractor.extract(message);

        let mut best: Option<(&str, f64)> = None;
        for label in self.table.hits(message) {
            let confidence = self.scorer.score(message);
            // Strictly greater: on a tie the earlier intent stays
            if best.map_or(true, |(_, c)| confidence > c) {
                best = Some((label, confidence));
            }
        }

        let result = match best {
            Some((label, confidence)) => RecognitionResult::new(label, confidence, entities),
            None if entities.contains_key(&EntityKind::SubjectName) => RecognitionResult::new(
                self.fallback_intent.as_str(),
                self.fallback_confidence,
                entities,
            ),
            None => RecognitionResult {
                entities,
                ..RecognitionResult::unknown()
            },
        };

        debug!(
            intent = %result.intent,
            confidence = result.confidence,
            entities = result.entities.len(),
            "Recognized message"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IntentPatternSpec;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new().unwrap()
    }

    #[test]
    fn test_empty_message_is_unknown() {
        let classifier = classifier();

        assert_eq!(classifier.recognize(""), RecognitionResult::unknown());
        assert_eq!(classifier.recognize("   \t\n"), RecognitionResult::unknown());
    }

    #[test]
    fn test_inscription_keyword() {
        let result = classifier().recognize("后羿带什么铭文");

        assert_eq!(result.intent, "inscription");
        assert!(result.confidence >= 0.85);
        assert_eq!(result.subject_name(), Some("后羿"));
    }

    #[test]
    fn test_explicit_request_boost() {
        let result = classifier().recognize("How to build Li Bai?");

        assert_eq!(result.intent, "equipment");
        assert_eq!(result.subject_name(), Some("Li Bai"));
        assert!((result.confidence - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_detail_boost_is_clamped() {
        let result = classifier().recognize("推荐一套详细的出装");

        assert_eq!(result.intent, "equipment");
        assert!((result.confidence - 0.99).abs() < 1e-9);
    }

    #[test]
    fn test_detail_boost_without_explicit_request() {
        let result = classifier().recognize("具体的野怪刷新时间");

        assert_eq!(result.intent, "monster_timer");
        assert!((result.confidence - 0.90).abs() < 1e-9);
    }

    #[test]
    fn test_tie_goes_to_earlier_intent() {
        // Hits equipment and inscription with identical confidence
        let result = classifier().recognize("铭文和出装");
        assert_eq!(result.intent, "equipment");
    }

    #[test]
    fn test_boost_keywords_fold_unicode_case() {
        let config = IntentConfig {
            intents: vec![IntentPatternSpec::keywords("equipment", &["Équipement"])],
            confidence: ConfidenceSpec {
                explicit_request_keywords: vec!["Conseillez".to_string()],
                ..ConfidenceSpec::default()
            },
            ..IntentConfig::default()
        };
        let classifier = IntentClassifier::from_config(&config).unwrap();

        let result = classifier.recognize("quel équipement acheter");
        assert_eq!(result.intent, "equipment");
        assert!((result.confidence - 0.85).abs() < 1e-9);

        let result = classifier.recognize("CONSEILLEZ un ÉQUIPEMENT");
        assert_eq!(result.intent, "equipment");
        assert!((result.confidence - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_subject_fallback() {
        let result = classifier().recognize("亚瑟");

        assert_eq!(result.intent, "equipment");
        assert!((result.confidence - 0.70).abs() < 1e-9);
        assert_eq!(result.subject_name(), Some("亚瑟"));
    }

    #[test]
    fn test_tier_alone_stays_unknown() {
        let result = classifier().recognize("我是星耀");

        assert!(result.is_unknown());
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.tier(), Some("星耀"));
    }

    #[test]
    fn test_unmatched_message() {
        let result = classifier().recognize("the weather is nice today");

        assert!(result.is_unknown());
        assert_eq!(result.confidence, 0.0);
        assert!(result.entities.is_empty());
    }

    #[test]
    fn test_custom_table_and_fallback() {
        let config = IntentConfig {
            intents: vec![
                IntentPatternSpec::keywords("lore", &["story"]),
                IntentPatternSpec::keywords("skins", &["skin"]),
            ],
            subject_names: vec!["Arthur".to_string()],
            tiers: Vec::new(),
            fallback_intent: "lore".to_string(),
            ..IntentConfig::default()
        };
        let classifier = IntentClassifier::from_config(&config).unwrap();

        assert_eq!(classifier.recognize("best Arthur skin").intent, "skins");
        assert_eq!(classifier.recognize("Arthur").intent, "lore");
        assert!(classifier.recognize("出装").is_unknown());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = IntentConfig {
            fallback_intent: "missing".to_string(),
            ..IntentConfig::default()
        };
        assert!(IntentClassifier::from_config(&config).is_err());
    }
}
