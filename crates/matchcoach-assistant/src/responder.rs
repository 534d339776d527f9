//! Chat responders
//!
//! A [`Responder`] turns an assembled prompt into reply text. The mock
//! responder answers from canned text keyed by intent; the remote responder
//! calls an OpenAI-compatible chat completion endpoint.

use async_trait::async_trait;
use matchcoach_core::{ChatMessage, Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::ResponderConfig;

const PERSONA_TEMPERATURE: f32 = 0.8;
const PERSONA_MAX_TOKENS: u32 = 500;

/// Produces reply text for an assembled prompt
#[async_trait]
pub trait Responder: Send + Sync {
    /// Short name used in logs and metric labels
    fn name(&self) -> &'static str;

    /// Reply to a full prompt recognized as `intent`
    async fn respond(&self, messages: &[ChatMessage], intent: &str) -> Result<String>;

    /// Reply in character as `persona`
    async fn persona_reply(&self, persona: &str, message: &str) -> Result<String>;
}

/// Pick the responder for a configuration
///
/// Placeholder API keys select the mock responder.
pub fn build_responder(config: &ResponderConfig) -> Result<Arc<dyn Responder>> {
    if config.has_api_key() {
        info!(model = %config.model, base_url = %config.base_url, "Using remote responder");
        Ok(Arc::new(RemoteResponder::new(config.clone())?))
    } else {
        info!("No API key configured, using mock responder");
        Ok(Arc::new(MockResponder::new()))
    }
}

/// Offline responder with canned replies
#[derive(Debug, Clone, Copy, Default)]
pub struct MockResponder;

impl MockResponder {
    pub fn new() -> Self {
        Self
    }

    /// Canned reply for an intent; unrecognized intents get the unknown reply
    pub fn canned_reply(intent: &str) -> &'static str {
        match intent {
            "equipment" => {
                "Current patch build: Swift Boots, Doomsday, Infinity Blade, Daybreak, \
                 Bloodweeper, Shadow Ripper. High attack speed and crit suit marksmen like \
                 Luban No.7. Adjust late game to how the match is going."
            }
            "inscription" => {
                "Recommended arcana: 10 Fate, 10 Eagle Eye, 10 Hunt. That gives 16% crit \
                 rate, 9 physical attack, 10% movement speed and 10% attack speed for marksmen."
            }
            "bp_suggestion" => {
                "Draft around your lane opponent. Against burst assassins, consider a tank to \
                 protect the backline. Keep the lineup balanced with frontline, damage and control."
            }
            "match_analysis" => {
                "For a review, start with participation and KDA. Low participation means join \
                 more team fights; low KDA means watch your positioning. Check how your economy \
                 developed and share resources sensibly."
            }
            "monster_timer" => {
                "Respawn times: red and blue buff 90 seconds, Tyrant and Overlord 3 minutes. \
                 Use the in-game timer or a phone alarm and plan your jungle route around them."
            }
            "entertainment" => {
                "Trivia time: do you know which hero is the oldest? Arthur was one of the very \
                 first heroes! Anything else you want to know?"
            }
            _ => {
                "Sorry, I didn't quite get that. You could try asking:\n\
                 • How should Luban No.7 build items?\n\
                 • Which heroes are strong this patch?\n\
                 • Any draft advice?"
            }
        }
    }

    /// Canned in-character line, with a greeting for unlisted personas
    pub fn canned_persona(persona: &str) -> String {
        match persona {
            "鲁班七号" | "Luban No.7" => {
                "Hmph, I am Luban No.7, mechanical masterpiece! Ask away, this genius can solve anything!"
                    .to_string()
            }
            "亚瑟" | "Arthur" => {
                "I am Arthur, shield of holy light! For justice, I will never retreat!".to_string()
            }
            "妲己" | "Daji" => "Oh my~ is there something you want to ask Daji?".to_string(),
            other => format!("I am {}, nice to meet you!", other),
        }
    }
}

#[async_trait]
impl Responder for MockResponder {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn respond(&self, _messages: &[ChatMessage], intent: &str) -> Result<String> {
        Ok(Self::canned_reply(intent).to_string())
    }

    async fn persona_reply(&self, persona: &str, _message: &str) -> Result<String> {
        Ok(Self::canned_persona(persona))
    }
}

/// OpenAI-compatible chat completion request
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Responder backed by a remote chat completion API
pub struct RemoteResponder {
    config: ResponderConfig,
    http_client: reqwest::Client,
}

impl RemoteResponder {
    pub fn new(config: ResponderConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::responder(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String> {
        let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));
        debug!(url = %url, messages = request.messages.len(), "Sending completion request");

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| Error::responder(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::responder(format!("backend returned {}: {}", status, body)));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::responder(format!("invalid completion body: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::responder("completion contained no choices"))
    }
}

#[async_trait]
impl Responder for RemoteResponder {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn respond(&self, messages: &[ChatMessage], _intent: &str) -> Result<String> {
        self.complete(&CompletionRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
            top_p: Some(self.config.top_p),
            max_tokens: self.config.max_tokens,
        })
        .await
    }

    async fn persona_reply(&self, persona: &str, message: &str) -> Result<String> {
        let messages = [
            ChatMessage::system(format!(
                "You are now the hero {}. Answer the player's question in that hero's voice \
                 and tone, and stay in character.",
                persona
            )),
            ChatMessage::user(message),
        ];

        self.complete(&CompletionRequest {
            model: &self.config.model,
            messages: &messages,
            temperature: PERSONA_TEMPERATURE,
            top_p: None,
            max_tokens: PERSONA_MAX_TOKENS,
        })
        .await
    }
}
