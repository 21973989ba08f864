use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use tokio::sync::mpsc;
use tracing::info;

use talkturn::{
    ChatSession, Config, HostRuntime, HttpChatApi, MediaSource, Scenario, SessionConfig, TurnError,
};

#[derive(Parser)]
#[command(name = "talkturn", about = "Voice conversation pipeline")]
struct Cli {
    /// Configuration file (without extension)
    #[arg(long, default_value = "config/talkturn")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the built-in conversation scenarios
    Scenarios,

    /// Run one conversation turn from a prerecorded audio file
    Turn {
        /// Audio file standing in for the microphone
        #[arg(long)]
        input: PathBuf,

        /// Scenario id
        #[arg(long, default_value_t = 1)]
        scenario: u32,
    },
}

/// Headless stand-in for the webview media API: streams a prerecorded
/// file's bytes as capture chunks.
struct FileMediaSource {
    path: PathBuf,
}

const CHUNK_BYTES: usize = 32 * 1024;

#[async_trait]
impl MediaSource for FileMediaSource {
    async fn open(&self) -> Result<mpsc::Receiver<Vec<u8>>, TurnError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let chunks: Vec<Vec<u8>> = bytes.chunks(CHUNK_BYTES).map(|c| c.to_vec()).collect();

        let (tx, rx) = mpsc::channel(chunks.len().max(1));
        tokio::spawn(async move {
            for chunk in chunks {
                if tx.send(chunk).await.is_err() {
                    break;
                }
            }
        });

        Ok(rx)
    }

    async fn close(&self) -> Result<(), TurnError> {
        Ok(())
    }
}

/// There is no host runtime in a plain terminal; every probe fails and
/// capture degrades to the browser variant.
struct NoHost;

#[async_trait]
impl HostRuntime for NoHost {
    async fn platform(&self) -> Result<String, TurnError> {
        Err(TurnError::HostUnavailable(
            "not embedded in a host runtime".to_string(),
        ))
    }

    async fn start_recording(&self) -> Result<(), TurnError> {
        Err(TurnError::HostUnavailable(
            "not embedded in a host runtime".to_string(),
        ))
    }

    async fn stop_recording(&self) -> Result<PathBuf, TurnError> {
        Err(TurnError::HostUnavailable(
            "not embedded in a host runtime".to_string(),
        ))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;
    info!(service = %cfg.service.name, api = %cfg.api.base_url, "loaded config");

    match cli.command {
        Command::Scenarios => {
            for scenario in Scenario::builtin() {
                println!("{:>3}  {}", scenario.id, scenario.name);
            }
        }

        Command::Turn { input, scenario } => {
            let scenario = Scenario::find(scenario).context("unknown scenario id")?;
            info!(scenario = %scenario.name, input = %input.display(), "running one turn");

            let api = HttpChatApi::new(cfg.api.base_url.clone(), cfg.request_timeout())?;
            let mut session_config = SessionConfig::new(scenario);
            session_config.debounce_window = cfg.debounce_window();

            let session = Arc::new(ChatSession::new(
                session_config,
                Arc::new(NoHost),
                Arc::new(FileMediaSource { path: input }),
                Arc::new(api),
            ));

            // Start "recording" (the file feeds the chunk stream), then
            // stop, which runs the full pipeline.
            session.toggle().await?;
            session.toggle().await?;

            for entry in session.transcript() {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            }
        }
    }

    Ok(())
}
