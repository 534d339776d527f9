//! MatchCoach Core
//!
//! Types and error handling shared across MatchCoach components.
//!
//! This crate provides:
//! - Recognition results produced by the intent classifier
//! - Match telemetry and analysis outcomes used by the performance analyzer
//! - Chat message types consumed by the assistant layer
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    compute_kda, AnalysisOutcome, ChatMessage, Entities, EntityKind, MatchTelemetry,
    OverallRating, ParticipationScale, RecognitionResult, Turn, UNKNOWN_INTENT,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        AnalysisOutcome, EntityKind, MatchTelemetry, OverallRating, RecognitionResult,
    };
}
