//! MatchCoach Intent
//!
//! Deterministic, rule-based recognition of what a player is asking about.
//!
//! A message is matched against an ordered table of intents, each selected by
//! keyword or regex rules, while two closed gazetteers pull out the subject
//! and tier it mentions. Confidence comes from a fixed base plus keyword
//! boosts, so identical input always yields identical output.

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod entities;
pub mod patterns;

pub use classifier::{ConfidenceScorer, IntentClassifier};
pub use config::{ConfidenceSpec, IntentConfig, IntentPatternSpec, MatchRule};
pub use entities::EntityExtractor;
pub use patterns::{CompiledIntent, PatternTable};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::IntentClassifier;
    pub use crate::config::{IntentConfig, IntentPatternSpec, MatchRule};
    pub use matchcoach_core::{EntityKind, RecognitionResult};
}
