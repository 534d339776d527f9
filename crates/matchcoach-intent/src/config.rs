//! Configuration for the intent classifier

use crate::catalog;
use matchcoach_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the classifier needs: the ordered pattern table, the two
/// gazetteers and the confidence rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentConfig {
    /// Intents in priority order; earlier entries win confidence ties
    #[serde(default = "catalog::default_intents")]
    pub intents: Vec<IntentPatternSpec>,

    /// Known subject names, scanned in order
    #[serde(default = "catalog::default_subject_names")]
    pub subject_names: Vec<String>,

    /// Known tier names
    #[serde(default = "catalog::default_tiers")]
    pub tiers: Vec<String>,

    /// Confidence scoring rules
    #[serde(default)]
    pub confidence: ConfidenceSpec,

    /// Intent forced when nothing matched but a subject name was found
    #[serde(default = "default_fallback_intent")]
    pub fallback_intent: String,

    /// Confidence reported for the fallback intent
    #[serde(default = "default_fallback_confidence")]
    pub fallback_confidence: f64,
}

/// One intent and the rules that select it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentPatternSpec {
    /// Intent label
    pub label: String,

    /// Match rules; any single hit selects the intent
    pub rules: Vec<MatchRule>,
}

impl IntentPatternSpec {
    /// Build an intent matched by plain keywords
    pub fn keywords(label: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            label: label.into(),
            rules: keywords.iter().map(|k| MatchRule::keyword(*k)).collect(),
        }
    }

    /// Append a regex rule
    pub fn with_regex(mut self, pattern: impl Into<String>) -> Self {
        self.rules.push(MatchRule::regex(pattern));
        self
    }
}

/// A single text-match predicate, always evaluated case-insensitively
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "lowercase")]
pub enum MatchRule {
    /// Substring match
    Keyword {
        /// Literal to look for
        value: String,
    },

    /// Regular expression search
    Regex {
        /// Pattern, compiled case-insensitive
        pattern: String,
    },
}

impl MatchRule {
    /// Create a keyword rule
    pub fn keyword(value: impl Into<String>) -> Self {
        Self::Keyword { value: value.into() }
    }

    /// Create a regex rule
    pub fn regex(pattern: impl Into<String>) -> Self {
        Self::Regex { pattern: pattern.into() }
    }
}

/// Intent-agnostic confidence rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceSpec {
    /// Confidence of any pattern hit
    #[serde(default = "default_base")]
    pub base: f64,

    /// Keywords signalling an explicit request ("recommend", "how to")
    #[serde(default = "catalog::default_explicit_request_keywords")]
    pub explicit_request_keywords: Vec<String>,

    #[serde(default = "default_explicit_boost")]
    pub explicit_request_boost: f64,

    /// Keywords asking for detail ("detailed", "specific")
    #[serde(default = "catalog::default_detail_request_keywords")]
    pub detail_request_keywords: Vec<String>,

    #[serde(default = "default_detail_boost")]
    pub detail_request_boost: f64,

    /// Upper clamp for boosted confidence
    #[serde(default = "default_max")]
    pub max: f64,
}

impl Default for ConfidenceSpec {
    fn default() -> Self {
        Self {
            base: default_base(),
            explicit_request_keywords: catalog::default_explicit_request_keywords(),
            explicit_request_boost: default_explicit_boost(),
            detail_request_keywords: catalog::default_detail_request_keywords(),
            detail_request_boost: default_detail_boost(),
            max: default_max(),
        }
    }
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            intents: catalog::default_intents(),
            subject_names: catalog::default_subject_names(),
            tiers: catalog::default_tiers(),
            confidence: ConfidenceSpec::default(),
            fallback_intent: default_fallback_intent(),
            fallback_confidence: default_fallback_confidence(),
        }
    }
}

impl IntentConfig {
    /// Load from YAML string; omitted sections fall back to the built-in catalog
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read intent config {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Intent labels in declaration order
    pub fn labels(&self) -> Vec<&str> {
        self.intents.iter().map(|i| i.label.as_str()).collect()
    }

    /// Check the invariants the classifier relies on
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for intent in &self.intents {
            if intent.label.trim().is_empty() {
                return Err(Error::config("intent label must not be empty"));
            }
            if intent.label == matchcoach_core::UNKNOWN_INTENT {
                return Err(Error::config("'unknown' is reserved and cannot be declared"));
            }
            if !seen.insert(intent.label.as_str()) {
                return Err(Error::config(format!("duplicate intent '{}'", intent.label)));
            }
            if intent.rules.is_empty() {
                return Err(Error::config(format!("intent '{}' has no rules", intent.label)));
            }
        }

        if !seen.contains(self.fallback_intent.as_str()) {
            return Err(Error::config(format!(
                "fallback intent '{}' is not declared",
                self.fallback_intent
            )));
        }

        let c = &self.confidence;
        check_unit("confidence.base", c.base, false)?;
        check_unit("confidence.max", c.max, false)?;
        check_unit("confidence.explicit_request_boost", c.explicit_request_boost, true)?;
        check_unit("confidence.detail_request_boost", c.detail_request_boost, true)?;
        check_unit("fallback_confidence", self.fallback_confidence, false)?;

        Ok(())
    }
}

/// Values must sit in (0, 1], or [0, 1] when zero is allowed
fn check_unit(name: &str, value: f64, allow_zero: bool) -> Result<()> {
    let low_ok = if allow_zero { value >= 0.0 } else { value > 0.0 };
    if low_ok && value <= 1.0 {
        Ok(())
    } else {
        let range = if allow_zero { "[0, 1]" } else { "(0, 1]" };
        Err(Error::config(format!("{} must be within {}, got {}", name, range, value)))
    }
}

fn default_base() -> f64 {
    0.85
}

fn default_explicit_boost() -> f64 {
    0.10
}

fn default_detail_boost() -> f64 {
    0.05
}

fn default_max() -> f64 {
    0.99
}

fn default_fallback_intent() -> String {
    "equipment".to_string()
}

fn default_fallback_confidence() -> f64 {
    0.70
}
