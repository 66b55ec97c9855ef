//! Console adapters for the demo binary.
//!
//! Speech is "synthesized" by printing to stdout and the search hand-off
//! prints the collected filters as JSON. Useful for exercising a session
//! without a real audio or search backend.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::filters::CarFilters;
use crate::ports::{SearchError, SearchTrigger, SpeechError, SpeechSynthesizer};

/// Prints spoken lines to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSpeech;

#[async_trait]
impl SpeechSynthesizer for ConsoleSpeech {
    async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        println!("assistant> {text}");
        Ok(())
    }

    async fn stop(&self) {
        debug!("console speech has nothing to interrupt");
    }
}

/// Prints the final filter payload instead of calling an inventory search.
#[derive(Debug, Default)]
pub struct ConsoleSearchTrigger;

#[async_trait]
impl SearchTrigger for ConsoleSearchTrigger {
    async fn trigger_search(&self, filters: &CarFilters) -> Result<(), SearchError> {
        let payload = serde_json::to_string_pretty(filters)
            .map_err(|error| SearchError::Unavailable(error.to_string()))?;
        println!("search> {payload}");
        Ok(())
    }
}
