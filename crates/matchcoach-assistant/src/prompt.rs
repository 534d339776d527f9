//! Prompt assembly

use matchcoach_core::{ChatMessage, Turn};

/// Default system prompt for the coaching assistant
pub const SYSTEM_PROMPT: &str = "\
You are a MOBA match assistant that gives players professional in-game advice.

Core rules:
1. Follow the game rules strictly. Never suggest cheats, exploits or rule-breaking play.
2. Only give strategy, item build, arcana and other compliant advice.
3. Keep answers short and easy to read on a phone (under 300 words).
4. Use professional but approachable language.

Intents:
- equipment: item build recommendations
- inscription: arcana setups
- bp_suggestion: ban/pick advice
- match_analysis: match reviews
- monster_timer: jungle and objective timers
- entertainment: trivia and fun questions

Answer format:
1. Answer the question directly.
2. Give 2-3 key suggestions.
3. Add concrete steps when they help.

Never encourage rule-breaking, never produce hateful or inflammatory content, and never \
reveal unannounced game information.";

/// Builds the message list sent to a responder
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    system_prompt: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(SYSTEM_PROMPT)
    }
}

impl PromptBuilder {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
        }
    }

    /// System prompt, prior turns as user/assistant pairs, then the annotated
    /// user message
    pub fn build(
        &self,
        message: &str,
        intent: &str,
        context: &[Turn],
        subject_id: Option<u32>,
    ) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(context.len() * 2 + 2);
        messages.push(ChatMessage::system(self.system_prompt.as_str()));

        for turn in context {
            messages.push(ChatMessage::user(turn.user_message.as_str()));
            messages.push(ChatMessage::assistant(turn.ai_response.as_str()));
        }

        let mut content = format!("{}\nCurrent intent: {}", message, intent);
        if let Some(id) = subject_id {
            content.push_str(&format!("\nSubject id: {}", id));
        }
        messages.push(ChatMessage::user(content));

        messages
    }
}
