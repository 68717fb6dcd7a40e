//! Command implementations for the transcript analyzer CLI.
//!
//! Each subcommand drives the same `yta_bridge` bindings the browser page
//! uses, against a running analyzer backend.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Subcommand};
use log::info;
use yta_bridge::bindings::ids;

pub mod analyze;
pub mod session;
pub mod transport;

use transport::HttpTransport;

/// Where the backend lives; the Flask app listens here by default.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Backend connection options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct Backend {
    /// Base URL of the analyzer backend
    #[arg(long, env = "YTA_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Give up on a request after this many seconds (waits indefinitely if unset)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

impl Backend {
    fn transport(&self) -> anyhow::Result<HttpTransport> {
        HttpTransport::new(&self.base_url, self.timeout_secs.map(Duration::from_secs))
    }
}

/// The transcript an analysis runs against.
#[derive(Args, Debug, Clone)]
pub struct TranscriptSource {
    /// Transcript text
    #[arg(short, long, conflicts_with = "transcript_file", required_unless_present = "transcript_file")]
    pub transcript: Option<String>,

    /// Read the transcript from a file
    #[arg(short = 'f', long)]
    pub transcript_file: Option<PathBuf>,
}

impl TranscriptSource {
    async fn load(&self) -> anyhow::Result<String> {
        match (&self.transcript, &self.transcript_file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read transcript from {}", path.display())),
            (None, None) => anyhow::bail!("either --transcript or --transcript-file is required"),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the transcript of a video
    Transcript {
        /// Video URL
        #[arg(short, long)]
        url: String,
    },

    /// Summarize a transcript
    Summarize {
        #[command(flatten)]
        source: TranscriptSource,
    },

    /// Classify the sentiment of a transcript
    Sentiment {
        #[command(flatten)]
        source: TranscriptSource,
    },

    /// Extract keywords from a transcript
    Keywords {
        #[command(flatten)]
        source: TranscriptSource,
    },

    /// Answer a question about a transcript
    Ask {
        #[command(flatten)]
        source: TranscriptSource,

        /// The question to answer
        #[arg(short, long)]
        question: String,
    },

    /// Fetch a transcript, then run every analysis against it
    Session {
        /// Video URL
        #[arg(short, long)]
        url: String,

        /// Also answer this question about the transcript
        #[arg(short, long)]
        question: Option<String>,
    },
}

pub async fn run(backend: &Backend, command: Command) -> anyhow::Result<()> {
    info!("Using analyzer backend at {}", backend.base_url);
    let transport = backend.transport()?;

    let text = match command {
        Command::Transcript { url } => {
            analyze::run_trigger(transport, ids::TRANSCRIPT_FORM, &[(ids::URL, url.as_str())]).await?
        }
        Command::Summarize { source } => {
            let transcript = source.load().await?;
            analyze::run_trigger(transport, ids::SUMMARIZE_BTN, &[(ids::TRANSCRIPT, transcript.as_str())])
                .await?
        }
        Command::Sentiment { source } => {
            let transcript = source.load().await?;
            analyze::run_trigger(transport, ids::SENTIMENT_BTN, &[(ids::TRANSCRIPT, transcript.as_str())])
                .await?
        }
        Command::Keywords { source } => {
            let transcript = source.load().await?;
            analyze::run_trigger(transport, ids::KEYWORD_BTN, &[(ids::TRANSCRIPT, transcript.as_str())])
                .await?
        }
        Command::Ask { source, question } => {
            let transcript = source.load().await?;
            analyze::run_trigger(
                transport,
                ids::ASK_QUESTION_FORM,
                &[(ids::TRANSCRIPT, transcript.as_str()), (ids::QUESTION, question.as_str())],
            )
            .await?
        }
        Command::Session { url, question } => {
            let report = session::run_session(transport, &url, question.as_deref()).await?;
            let mut lines = vec![report.transcript.clone(), String::new()];
            lines.extend(report.rendered().map(str::to_string));
            lines.join("\n")
        }
    };

    println!("{}", text);
    Ok(())
}
