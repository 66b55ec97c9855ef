//! Ports - interfaces to the world outside the conversational core.

mod search_trigger;
mod speech_synthesizer;

pub use search_trigger::{SearchError, SearchTrigger};
pub use speech_synthesizer::{SpeechError, SpeechSynthesizer};
