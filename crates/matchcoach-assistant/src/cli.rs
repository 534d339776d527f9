//! Command-line interface

use anyhow::Context;
use clap::{Parser, Subcommand};
use matchcoach_analysis::{coaching_tips, PerformanceAnalyzer};
use matchcoach_core::{MatchTelemetry, ParticipationScale, Turn};
use matchcoach_intent::IntentClassifier;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::AssistantConfig;
use crate::orchestrator::{ChatOrchestrator, ChatRequest};

#[derive(Parser, Debug)]
#[command(name = "matchcoach")]
#[command(author, version, about = "Intent recognition and match coaching assistant")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recognize the intent and entities of a message
    Classify {
        message: String,
    },

    /// Analyze a match telemetry JSON file
    Analyze {
        /// Telemetry file
        #[arg(short, long)]
        file: PathBuf,

        /// Scale of participation_rate in the file (percent or fraction)
        #[arg(short, long)]
        scale: Option<ParticipationScale>,

        /// Print outcome and report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run one assistant chat turn
    Chat {
        message: String,

        /// JSON file with prior turns
        #[arg(long)]
        context: Option<PathBuf>,

        /// Subject the conversation is about
        #[arg(long)]
        subject_id: Option<u32>,
    },

    /// Chat with a hero in character
    Persona {
        /// Hero name
        hero: String,

        message: String,
    },

    /// Print general coaching tips for a hero
    Tips {
        hero: String,

        #[arg(long, default_value = "unknown")]
        position: String,

        #[arg(long, default_value = "1")]
        difficulty: u8,
    },
}

/// Run a command and return what it prints
pub async fn execute(cli: &Cli) -> anyhow::Result<String> {
    let config = AssistantConfig::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Classify { message } => {
            let classifier = IntentClassifier::from_config(&config.intent_config()?)?;
            let result = classifier.recognize(message);
            Ok(serde_json::to_string_pretty(&result)?)
        }

        Commands::Analyze { file, scale, json } => {
            let scale = scale.unwrap_or(config.participation_scale);
            let telemetry = read_telemetry(file, scale)?;
            let analyzer = PerformanceAnalyzer::with_thresholds(config.analyzer_thresholds()?)?;

            let review = analyzer.review(&telemetry);
            info!(rating = %review.outcome.overall_rating, "Match analyzed");

            if *json {
                Ok(serde_json::to_string_pretty(&review)?)
            } else {
                Ok(review.report)
            }
        }

        Commands::Chat {
            message,
            context,
            subject_id,
        } => {
            let context = match context {
                Some(path) => read_context(path)?,
                None => Vec::new(),
            };
            let orchestrator = ChatOrchestrator::from_config(&config)?;
            info!(responder = orchestrator.responder_name(), "Running chat turn");

            let request = ChatRequest {
                message: message.clone(),
                context,
                subject_id: *subject_id,
            };
            let reply = orchestrator.process(&request).await;
            Ok(serde_json::to_string_pretty(&reply)?)
        }

        Commands::Persona { hero, message } => {
            let orchestrator = ChatOrchestrator::from_config(&config)?;
            Ok(orchestrator.persona(hero, message).await)
        }

        Commands::Tips {
            hero,
            position,
            difficulty,
        } => Ok(serde_json::to_string_pretty(&coaching_tips(
            hero,
            position,
            *difficulty,
        ))?),
    }
}

fn read_telemetry(path: &Path, scale: ParticipationScale) -> anyhow::Result<MatchTelemetry> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read telemetry file {}", path.display()))?;
    let telemetry: MatchTelemetry = serde_json::from_str(&raw)
        .with_context(|| format!("invalid telemetry in {}", path.display()))?;

    Ok(telemetry.normalized(scale))
}

fn read_context(path: &Path) -> anyhow::Result<Vec<Turn>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read context file {}", path.display()))?;

    serde_json::from_str(&raw).with_context(|| format!("invalid context in {}", path.display()))
}
