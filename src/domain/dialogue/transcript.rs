//! Conversation transcript kept for display purposes.
//!
//! The transcript is separate from the merged filter state: the controller
//! persists only filters across turns, while the transcript records every
//! line for the surrounding UI.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

/// One line of conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
    pub spoken_at: Timestamp,
}

/// Ordered conversation history for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user line.
    pub fn record_user(&mut self, text: impl Into<String>) {
        self.push(Speaker::User, text.into());
    }

    /// Appends an assistant line.
    pub fn record_assistant(&mut self, text: impl Into<String>) {
        self.push(Speaker::Assistant, text.into());
    }

    fn push(&mut self, speaker: Speaker, text: String) {
        self.entries.push(TranscriptEntry {
            speaker,
            text,
            spoken_at: Timestamp::now(),
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_lines_in_order() {
        let mut transcript = Transcript::new();
        transcript.record_user("hello");
        transcript.record_assistant("hi there");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[0].speaker, Speaker::User);
        assert_eq!(transcript.entries()[1].speaker, Speaker::Assistant);
        assert_eq!(transcript.entries()[1].text, "hi there");
    }

    #[test]
    fn new_transcript_is_empty() {
        assert!(Transcript::new().is_empty());
    }
}
