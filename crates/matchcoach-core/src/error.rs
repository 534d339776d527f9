//! Error types for MatchCoach

/// Result type alias using MatchCoach's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for MatchCoach operations
///
/// Classification, analysis and rendering never fail once constructed; these
/// variants cover building engines from configuration and calling a responder.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Pattern table compilation errors
    #[error("pattern error: {0}")]
    Pattern(String),

    /// Responder (mock or remote) errors
    #[error("responder error: {0}")]
    Responder(String),

    /// YAML parsing errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new pattern error
    pub fn pattern(msg: impl Into<String>) -> Self {
        Self::Pattern(msg.into())
    }

    /// Create a new responder error
    pub fn responder(msg: impl Into<String>) -> Self {
        Self::Responder(msg.into())
    }
}
