//! Turn-taking dialogue controller for a voice session.

mod controller;
mod prompts;
mod step;
mod transcript;

pub use controller::{DialogueController, DialogueState, TurnResult};
pub use step::DialogueStep;
pub use transcript::{Speaker, Transcript, TranscriptEntry};
