//! Voice session orchestration.
//!
//! Wraps the synchronous [`DialogueController`] with the asynchronous
//! concerns the core keeps out of the domain: serialized speech output,
//! the pause before a clarifying question, and the delayed search hand-off.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::AssistantConfig;
use crate::domain::dialogue::{DialogueController, TurnResult};
use crate::ports::{SearchError, SearchTrigger, SpeechError, SpeechSynthesizer};

/// Errors surfaced to the embedding UI. Domain turns never fail; only the
/// speech and search collaborators can.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Speech output failed: {0}")]
    Speech(#[from] SpeechError),

    #[error("Search hand-off failed: {0}")]
    Search(#[from] SearchError),
}

/// One voice session bound to a speech output and a search consumer.
///
/// Turn processing is single-flight: the controller sits behind a mutex and
/// spoken lines are synthesized strictly one after another, so at most one
/// synthesis is ever active.
pub struct VoiceSessionService<S, T> {
    controller: Mutex<DialogueController>,
    speaking: Mutex<()>,
    speech: Arc<S>,
    search: Arc<T>,
    config: AssistantConfig,
}

impl<S, T> VoiceSessionService<S, T>
where
    S: SpeechSynthesizer,
    T: SearchTrigger,
{
    pub fn new(speech: Arc<S>, search: Arc<T>, config: AssistantConfig) -> Self {
        Self {
            controller: Mutex::new(DialogueController::new()),
            speaking: Mutex::new(()),
            speech,
            search,
            config,
        }
    }

    /// Opens the session and speaks the greeting.
    pub async fn start(&self) -> Result<(), SessionError> {
        let greeting = {
            let mut controller = self.controller.lock().await;
            let session_id = controller.session_id();
            info!(%session_id, "voice session started");
            controller.start_session()
        };
        self.speak_all(&[greeting]).await
    }

    /// Processes one transcribed utterance end to end: domain turn, speech
    /// output, and (on confirmation) the delayed search hand-off.
    ///
    /// An empty transcript (a failed recognition) is a silent no-op turn.
    pub async fn handle_transcript(&self, transcript: &str) -> Result<TurnResult, SessionError> {
        let result = {
            let mut controller = self.controller.lock().await;
            controller.handle_utterance(transcript)
        };
        debug!(
            step = ?result.session_state,
            lines = result.spoken_responses.len(),
            "turn processed"
        );

        self.speak_all(&result.spoken_responses).await?;

        if result.search_triggered {
            tokio::time::sleep(self.config.search_delay()).await;
            info!("handing collected filters to the inventory search");
            self.search.trigger_search(&result.updated_filters).await?;
        }

        Ok(result)
    }

    /// Clears the session's collected criteria.
    pub async fn reset(&self) {
        self.controller.lock().await.reset();
        debug!("session reset");
    }

    pub async fn is_done(&self) -> bool {
        self.controller.lock().await.is_done()
    }

    /// Stops any in-flight speech. Safe to call when nothing is speaking.
    pub async fn stop_speaking(&self) {
        self.speech.stop().await;
    }

    /// Speaks lines strictly sequentially, pausing between consecutive
    /// lines so the echo lands before the follow-up question.
    async fn speak_all(&self, lines: &[String]) -> Result<(), SessionError> {
        let _guard = self.speaking.lock().await;
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.config.question_delay()).await;
            }
            if let Err(error) = self.speech.speak(line).await {
                warn!(%error, "speech output failed");
                return Err(error.into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::adapters::recording::{RecordingSearchTrigger, RecordingSynthesizer};

    use super::*;

    fn service() -> VoiceSessionService<RecordingSynthesizer, RecordingSearchTrigger> {
        VoiceSessionService::new(
            Arc::new(RecordingSynthesizer::new()),
            Arc::new(RecordingSearchTrigger::new()),
            AssistantConfig::immediate(),
        )
    }

    #[tokio::test]
    async fn start_speaks_the_greeting() {
        let service = service();
        service.start().await.unwrap();
        let spoken = service.speech.spoken_lines().await;
        assert_eq!(spoken.len(), 1);
        assert!(spoken[0].contains("car"));
    }

    #[tokio::test]
    async fn a_turn_speaks_every_response_line_in_order() {
        let service = service();
        service.start().await.unwrap();
        service
            .handle_transcript("a used bmw suv under 40000 euros")
            .await
            .unwrap();

        let spoken = service.speech.spoken_lines().await;
        // Greeting, echo, clarifying question.
        assert_eq!(spoken.len(), 3);
        assert!(spoken[1].starts_with("Got it"));
        assert!(spoken[2].contains("transmission"));
    }

    #[tokio::test]
    async fn confirmation_hands_filters_to_the_search() {
        let service = service();
        service.start().await.unwrap();
        service.handle_transcript("a used bmw").await.unwrap();
        service.handle_transcript("yes").await.unwrap();

        let searches = service.search.searches().await;
        assert_eq!(searches.len(), 1);
        assert_eq!(searches[0].makes, vec!["BMW"]);
        assert!(service.is_done().await);
    }

    #[tokio::test]
    async fn empty_transcript_stays_silent() {
        let service = service();
        service.start().await.unwrap();
        let before = service.speech.spoken_lines().await.len();
        let result = service.handle_transcript("").await.unwrap();
        assert!(result.spoken_responses.is_empty());
        assert_eq!(service.speech.spoken_lines().await.len(), before);
    }

    #[tokio::test]
    async fn synthesis_failure_surfaces_as_a_session_error() {
        let speech = Arc::new(RecordingSynthesizer::failing());
        let service = VoiceSessionService::new(
            speech,
            Arc::new(RecordingSearchTrigger::new()),
            AssistantConfig::immediate(),
        );
        let result = service.start().await;
        assert!(matches!(result, Err(SessionError::Speech(_))));
    }

    #[tokio::test]
    async fn reset_clears_collected_filters() {
        let service = service();
        service.start().await.unwrap();
        service.handle_transcript("a used bmw").await.unwrap();
        service.reset().await;
        let result = service.handle_transcript("automatic").await.unwrap();
        assert!(result.updated_filters.makes.is_empty());
    }

    #[tokio::test]
    async fn stop_speaking_is_a_no_op_when_idle() {
        let service = service();
        service.stop_speaking().await;
    }
}
