//! Command line interface
//!
//! Every command reads JSON from a file and returns a JSON document. The
//! binary prints it; tests call [`execute`] directly.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tutorlens_application::ports::registry::list_embedding_providers;
use tutorlens_application::{
    ClusteringServiceInterface, TranscriptAnalyzerInterface, analyze_responses, detect_transitions,
};
use tutorlens_domain::{ClassOverview, Scorecard, Topic, Transcript};
use tutorlens_infrastructure::input::{load_class, load_texts, load_transcript};
use tutorlens_infrastructure::{AppConfig, AppContext, init_app};

/// Command line interface for TutorLens
#[derive(Parser, Debug)]
#[command(name = "tutorlens")]
#[command(about = "TutorLens - Pedagogical analytics for tutoring conversations")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score one or more transcripts
    Analyze {
        /// Transcript files (text, turns or chat-log exchanges)
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Lesson topic selecting the domain vocabulary
        #[arg(short, long, default_value = Topic::DEFAULT)]
        topic: String,
    },
    /// Group texts by embedding similarity
    Cluster {
        /// JSON array of texts
        file: PathBuf,
        /// Number of clusters (defaults to `clustering.default_k`)
        #[arg(short)]
        k: Option<usize>,
    },
    /// Detect everyday-to-domain vocabulary shifts
    Transitions {
        /// Transcript file
        file: PathBuf,
        /// Lesson topic
        #[arg(short, long, default_value = Topic::DEFAULT)]
        topic: String,
    },
    /// Per-response understanding and support suggestions
    Insights {
        /// Transcript file
        file: PathBuf,
        /// Lesson topic
        #[arg(short, long, default_value = Topic::DEFAULT)]
        topic: String,
    },
    /// Class-wide averages and learners needing support
    Class {
        /// JSON object mapping learner name to transcript
        file: PathBuf,
        /// Lesson topic
        #[arg(short, long, default_value = Topic::DEFAULT)]
        topic: String,
    },
    /// List registered embedding providers
    Providers,
}

/// Scorecard tagged with the file it came from
#[derive(Debug, Serialize)]
struct FileScorecard<'a> {
    file: &'a Path,
    scorecard: Scorecard,
}

/// Registered provider listing entry
#[derive(Debug, Serialize)]
struct ProviderInfo {
    name: &'static str,
    description: &'static str,
}

/// Run a command against a loaded configuration and render its JSON output
pub async fn execute(cli: &Cli, config: AppConfig) -> anyhow::Result<String> {
    let context = init_app(config).context("Failed to initialize services")?;
    let value = run_command(&cli.command, &context).await?;
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(rendered)
}

async fn run_command(command: &Command, context: &AppContext) -> anyhow::Result<serde_json::Value> {
    let value = match command {
        Command::Analyze { files, topic } => {
            let topic = Topic::new(topic.as_str());
            let batch = files
                .iter()
                .map(|file| Ok((read_transcript(file)?, topic.clone())))
                .collect::<anyhow::Result<Vec<(Transcript, Topic)>>>()?;
            let cards = context.analysis().analyze_batch(&batch);
            if cards.len() == 1 {
                serde_json::to_value(&cards[0])?
            } else {
                let tagged: Vec<FileScorecard<'_>> = files
                    .iter()
                    .zip(cards)
                    .map(|(file, scorecard)| FileScorecard { file, scorecard })
                    .collect();
                serde_json::to_value(tagged)?
            }
        }
        Command::Cluster { file, k } => {
            let texts = load_texts(file)
                .with_context(|| format!("Failed to load texts from {}", file.display()))?;
            let k = k.unwrap_or(context.config.clustering.default_k);
            debug!(texts = texts.len(), k, "Clustering texts");
            serde_json::to_value(context.clustering().cluster(&texts, k).await?)?
        }
        Command::Transitions { file, topic } => {
            let transcript = read_transcript(file)?;
            serde_json::to_value(detect_transitions(&transcript, &Topic::new(topic.as_str())))?
        }
        Command::Insights { file, topic } => {
            let transcript = read_transcript(file)?;
            serde_json::to_value(analyze_responses(&transcript, &Topic::new(topic.as_str())))?
        }
        Command::Class { file, topic } => {
            let roster = load_class(file)
                .with_context(|| format!("Failed to load class roster from {}", file.display()))?;
            let topic = Topic::new(topic.as_str());
            let batch: Vec<(Transcript, Topic)> = roster
                .iter()
                .map(|(_, transcript)| (transcript.clone(), topic.clone()))
                .collect();
            let cards = context.analysis().analyze_batch(&batch);
            let entries: Vec<(String, Scorecard)> = roster
                .into_iter()
                .map(|(learner, _)| learner)
                .zip(cards)
                .collect();
            serde_json::to_value(ClassOverview::from_scorecards(&entries))?
        }
        Command::Providers => {
            let providers: Vec<ProviderInfo> = list_embedding_providers()
                .into_iter()
                .map(|(name, description)| ProviderInfo { name, description })
                .collect();
            serde_json::to_value(providers)?
        }
    };
    Ok(value)
}

fn read_transcript(file: &Path) -> anyhow::Result<Transcript> {
    load_transcript(file)
        .with_context(|| format!("Failed to load transcript from {}", file.display()))
}
