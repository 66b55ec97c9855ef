//! Console demo for the voice assistant.
//!
//! Reads utterances from stdin, runs them through a voice session, and
//! prints the assistant's responses. The search hand-off prints the final
//! filter payload as JSON.

use std::process;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::error;
use tracing_subscriber::EnvFilter;

use showroom_voice::adapters::console::{ConsoleSearchTrigger, ConsoleSpeech};
use showroom_voice::application::VoiceSessionService;
use showroom_voice::config::AppConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Failed to load configuration: {error}");
            process::exit(1);
        }
    };
    if let Err(error) = config.validate() {
        eprintln!("Invalid configuration: {error}");
        process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.assistant.log_level.clone())),
        )
        .init();

    let service = VoiceSessionService::new(
        Arc::new(ConsoleSpeech),
        Arc::new(ConsoleSearchTrigger),
        config.assistant.clone(),
    );

    if let Err(start_error) = service.start().await {
        error!(%start_error, "could not open the session");
        process::exit(1);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if service.is_done().await {
            break;
        }
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(read_error) => {
                error!(%read_error, "could not read from stdin");
                break;
            }
        };
        if let Err(turn_error) = service.handle_transcript(&line).await {
            error!(%turn_error, "turn failed");
        }
    }
}
