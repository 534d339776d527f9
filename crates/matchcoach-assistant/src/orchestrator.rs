//! One chat turn: recognize, prompt, respond, suggest

use matchcoach_core::{Entities, Result, Turn};
use matchcoach_intent::IntentClassifier;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::AssistantConfig;
use crate::prompt::PromptBuilder;
use crate::responder::{build_responder, Responder};

/// Reply used when the responder fails
pub const OFFLINE_REPLY: &str = "Sorry, the assistant is offline right now. Please try again later.";

/// Incoming chat turn
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,

    /// Prior turns, oldest first
    #[serde(default)]
    pub context: Vec<Turn>,

    /// Subject the conversation is attached to
    #[serde(default)]
    pub subject_id: Option<u32>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Outcome of a chat turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub intent: String,
    pub confidence: f64,
    pub entities: Entities,
    pub suggestions: Vec<String>,
}

/// Three follow-up prompts for an intent
pub fn follow_up_suggestions(intent: &str) -> Vec<String> {
    let items: [&str; 3] = match intent {
        "equipment" => ["View arcana setups", "View lane matchups", "View build reasoning"],
        "inscription" => ["View item builds", "View skill combos", "View lane matchups"],
        "bp_suggestion" => [
            "View lineup weaknesses",
            "View ban/pick advice",
            "View counter picks",
        ],
        "match_analysis" => ["View detailed stats", "View improvement tips", "Share this match"],
        "monster_timer" => ["Start jungle timer", "View skill cooldowns", "View engage timing"],
        "entertainment" => ["Hero voice chat", "Trivia quiz", "Match record card"],
        _ => ["Try another question", "View hero profiles", "View item builds"],
    };

    items.iter().map(|s| s.to_string()).collect()
}

/// Runs chat turns against a classifier and a responder
pub struct ChatOrchestrator {
    classifier: Arc<IntentClassifier>,
    responder: Arc<dyn Responder>,
    prompts: PromptBuilder,
    context_window: usize,
}

impl ChatOrchestrator {
    pub fn new(classifier: Arc<IntentClassifier>, responder: Arc<dyn Responder>) -> Self {
        Self {
            classifier,
            responder,
            prompts: PromptBuilder::default(),
            context_window: 5,
        }
    }

    /// Build the classifier and responder described by a configuration
    pub fn from_config(config: &AssistantConfig) -> Result<Self> {
        let classifier = IntentClassifier::from_config(&config.intent_config()?)?;
        let responder = build_responder(&config.responder)?;

        Ok(Self::new(Arc::new(classifier), responder).with_context_window(config.context_window))
    }

    /// Number of most recent turns forwarded to the responder
    pub fn with_context_window(mut self, turns: usize) -> Self {
        self.context_window = turns;
        self
    }

    pub fn responder_name(&self) -> &'static str {
        self.responder.name()
    }

    /// Handle one chat turn
    ///
    /// Responder failures are logged and replaced by [`OFFLINE_REPLY`].
    pub async fn process(&self, request: &ChatRequest) -> ChatReply {
        let recognition = self.classifier.recognize(&request.message);
        metrics::counter!("matchcoach_intents_total", "intent" => recognition.intent.clone())
            .increment(1);

        let skip = request.context.len().saturating_sub(self.context_window);
        let context = &request.context[skip..];

        let messages = self.prompts.build(
            &request.message,
            &recognition.intent,
            context,
            request.subject_id,
        );

        debug!(
            intent = %recognition.intent,
            confidence = recognition.confidence,
            context_turns = context.len(),
            responder = self.responder.name(),
            "Processing chat turn"
        );

        let response = match self.responder.respond(&messages, &recognition.intent).await {
            Ok(text) => text,
            Err(e) => {
                warn!(responder = self.responder.name(), error = %e, "Responder failed");
                OFFLINE_REPLY.to_string()
            }
        };
        metrics::counter!("matchcoach_chat_turns_total", "responder" => self.responder.name())
            .increment(1);

        ChatReply {
            suggestions: follow_up_suggestions(&recognition.intent),
            response,
            intent: recognition.intent,
            confidence: recognition.confidence,
            entities: recognition.entities,
        }
    }

    /// Reply in character as `persona`
    pub async fn persona(&self, persona: &str, message: &str) -> String {
        match self.responder.persona_reply(persona, message).await {
            Ok(text) => text,
            Err(e) => {
                warn!(persona = %persona, error = %e, "Persona reply failed");
                format!("Sorry, {} is not online right now~", persona)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_ups_have_three_items() {
        for intent in [
            "equipment",
            "inscription",
            "bp_suggestion",
            "match_analysis",
            "monster_timer",
            "entertainment",
            "unknown",
        ] {
            assert_eq!(follow_up_suggestions(intent).len(), 3, "{}", intent);
        }
    }

    #[test]
    fn test_unlisted_intent_gets_default_follow_ups() {
        assert_eq!(follow_up_suggestions("lore"), follow_up_suggestions("unknown"));
        assert_eq!(follow_up_suggestions("unknown")[0], "Try another question");
    }

    #[test]
    fn test_chat_request_defaults() {
        let request: ChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();

        assert!(request.context.is_empty());
        assert!(request.subject_id.is_none());
    }
}
