//! Assistant configuration

use matchcoach_analysis::AnalyzerThresholds;
use matchcoach_core::ParticipationScale;
use matchcoach_intent::IntentConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// API keys that mean "no real key configured"
const PLACEHOLDER_KEYS: &[&str] = &[
    "",
    "demo_key_for_testing",
    "your_api_key_here",
    "your_zhipuai_api_key_here",
];

/// Assistant configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Responder settings
    pub responder: ResponderConfig,

    /// Prior turns forwarded to the responder
    pub context_window: usize,

    /// Intent table file; the built-in catalog when unset
    pub intents_path: Option<PathBuf>,

    /// Analyzer thresholds file; the defaults when unset
    pub thresholds_path: Option<PathBuf>,

    /// Scale participation rates are recorded on in imported telemetry
    pub participation_scale: ParticipationScale,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            responder: ResponderConfig::default(),
            context_window: default_context_window(),
            intents_path: None,
            thresholds_path: None,
            participation_scale: ParticipationScale::Percent,
        }
    }
}

impl AssistantConfig {
    /// Load configuration from an optional file plus `MATCHCOACH_*`
    /// environment variables
    ///
    /// Nested keys use a double underscore, e.g.
    /// `MATCHCOACH_RESPONDER__API_KEY`.
    pub fn load(config_path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix("MATCHCOACH")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load from a YAML string
    pub fn from_yaml(yaml: &str) -> matchcoach_core::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Intent configuration, from file when one is configured
    pub fn intent_config(&self) -> matchcoach_core::Result<IntentConfig> {
        match &self.intents_path {
            Some(path) => IntentConfig::from_file(path),
            None => Ok(IntentConfig::default()),
        }
    }

    /// Analyzer thresholds, from file when one is configured
    pub fn analyzer_thresholds(&self) -> matchcoach_core::Result<AnalyzerThresholds> {
        match &self.thresholds_path {
            Some(path) => AnalyzerThresholds::from_file(path),
            None => Ok(AnalyzerThresholds::default()),
        }
    }
}

/// Settings for the chat-completion backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponderConfig {
    /// API key; placeholders select the mock responder
    pub api_key: String,

    /// Base URL of an OpenAI-compatible API
    pub base_url: String,

    /// Model name
    pub model: String,

    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://open.bigmodel.cn/api/paas/v4".to_string(),
            model: "glm-4".to_string(),
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 2000,
            timeout_secs: 30,
        }
    }
}

impl ResponderConfig {
    /// Whether a usable API key is configured
    pub fn has_api_key(&self) -> bool {
        !PLACEHOLDER_KEYS.contains(&self.api_key.trim())
    }
}

fn default_context_window() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AssistantConfig::default();

        assert_eq!(config.context_window, 5);
        assert_eq!(config.responder.max_tokens, 2000);
        assert!(!config.responder.has_api_key());
        assert!(config.intents_path.is_none());
    }

    #[test]
    fn test_placeholder_keys() {
        let mut responder = ResponderConfig::default();

        responder.api_key = "demo_key_for_testing".to_string();
        assert!(!responder.has_api_key());

        responder.api_key = "your_zhipuai_api_key_here".to_string();
        assert!(!responder.has_api_key());

        responder.api_key = "  ".to_string();
        assert!(!responder.has_api_key());

        responder.api_key = "sk-live-123".to_string();
        assert!(responder.has_api_key());
    }

    #[test]
    fn test_from_yaml_partial() {
        let yaml = r#"
context_window: 3
participation_scale: fraction
responder:
  model: glm-4-air
"#;

        let config = AssistantConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.context_window, 3);
        assert_eq!(config.participation_scale, ParticipationScale::Fraction);
        assert_eq!(config.responder.model, "glm-4-air");
        assert_eq!(config.responder.temperature, 0.7);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "context_window: 2").unwrap();
        writeln!(file, "responder:").unwrap();
        writeln!(file, "  timeout_secs: 5").unwrap();

        let config = AssistantConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.context_window, 2);
        assert_eq!(config.responder.timeout_secs, 5);
        assert_eq!(config.responder.top_p, 0.9);
    }

    #[test]
    fn test_missing_sources_use_defaults() {
        let config = AssistantConfig::load(None).unwrap();
        assert_eq!(config.responder.model, "glm-4");
    }

    #[test]
    fn test_default_engines_configuration() {
        let config = AssistantConfig::default();
        assert!(config.intent_config().is_ok());
        assert!(config.analyzer_thresholds().is_ok());

        let config = AssistantConfig {
            intents_path: Some(PathBuf::from("/nonexistent/intents.yaml")),
            ..AssistantConfig::default()
        };
        assert!(config.intent_config().is_err());
    }
}
