//! Utterance parsing into a structured command.
//!
//! The engine is deterministic, synchronous and infallible: any input string
//! maps to an [`ExtractedCommand`], degrading to `Intent::Unknown` with empty
//! entities when nothing is recognized.

mod command;
mod engine;
mod intent;
mod numeric;

pub use command::{ExtractedCommand, ExtractedEntities, NumericRange};
pub use engine::parse;
pub use intent::Intent;
