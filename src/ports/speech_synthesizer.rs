//! Speech Synthesizer Port - how spoken responses reach the user.
//!
//! The core is agnostic to the mechanism: a platform text-to-speech API, a
//! chat box, or a test harness collecting strings.

use async_trait::async_trait;

/// Errors that can occur while synthesizing speech.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Speech synthesis is not supported by this runtime")]
    Unsupported,

    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),
}

/// Port for turning response text into audible (or visible) output.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Speaks one line. Resolves when the line has been fully delivered;
    /// the caller serializes calls so at most one synthesis is active.
    async fn speak(&self, text: &str) -> Result<(), SpeechError>;

    /// Cancels any in-flight synthesis. Must be a no-op when idle.
    async fn stop(&self);
}
