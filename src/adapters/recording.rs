//! In-memory recording adapters for tests.
//!
//! Both doubles capture every call behind a mutex so assertions can inspect
//! exactly what a session spoke and searched for.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::filters::CarFilters;
use crate::ports::{SearchError, SearchTrigger, SpeechError, SpeechSynthesizer};

/// Captures spoken lines; optionally fails every synthesis call.
#[derive(Debug, Default)]
pub struct RecordingSynthesizer {
    lines: Arc<Mutex<Vec<String>>>,
    fail: bool,
    stopped: Arc<Mutex<u32>>,
}

impl RecordingSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A synthesizer whose every `speak` call fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Everything spoken so far, in synthesis order.
    pub async fn spoken_lines(&self) -> Vec<String> {
        self.lines.lock().await.clone()
    }

    /// How many times playback was interrupted.
    pub async fn stop_count(&self) -> u32 {
        *self.stopped.lock().await
    }
}

#[async_trait]
impl SpeechSynthesizer for RecordingSynthesizer {
    async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        if self.fail {
            return Err(SpeechError::SynthesisFailed(
                "recording synthesizer configured to fail".to_string(),
            ));
        }
        self.lines.lock().await.push(text.to_string());
        Ok(())
    }

    async fn stop(&self) {
        *self.stopped.lock().await += 1;
    }
}

/// Captures every filter payload handed to the search.
#[derive(Debug, Default)]
pub struct RecordingSearchTrigger {
    searches: Arc<Mutex<Vec<CarFilters>>>,
}

impl RecordingSearchTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every search triggered so far, in order.
    pub async fn searches(&self) -> Vec<CarFilters> {
        self.searches.lock().await.clone()
    }
}

#[async_trait]
impl SearchTrigger for RecordingSearchTrigger {
    async fn trigger_search(&self, filters: &CarFilters) -> Result<(), SearchError> {
        self.searches.lock().await.push(filters.clone());
        Ok(())
    }
}
