//! MatchCoach Assistant
//!
//! Chat orchestration on top of intent recognition: each turn is classified,
//! the recent context and intent are assembled into a prompt, and a responder
//! (canned or remote) produces the reply along with follow-up suggestions.

pub mod cli;
pub mod config;
pub mod orchestrator;
pub mod prompt;
pub mod responder;

pub use config::{AssistantConfig, ResponderConfig};
pub use orchestrator::{follow_up_suggestions, ChatOrchestrator, ChatReply, ChatRequest};
pub use prompt::PromptBuilder;
pub use responder::{build_responder, MockResponder, RemoteResponder, Responder};

/// Register descriptions for the assistant's metrics
pub fn describe_metrics() {
    metrics::describe_counter!(
        "matchcoach_intents_total",
        "Chat turns by recognized intent"
    );
    metrics::describe_counter!(
        "matchcoach_chat_turns_total",
        "Chat turns handled by responder"
    );
}
