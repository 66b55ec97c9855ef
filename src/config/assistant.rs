//! Voice assistant configuration.

use std::time::Duration;

use serde::Deserialize;

use super::error::ConfigValidationError;

/// Longest pause we allow between spoken lines or before the search fires.
const MAX_DELAY_MS: u64 = 30_000;

/// Timing and logging settings for the voice assistant.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Pause before the clarifying question follows the echo, in ms.
    #[serde(default = "default_question_delay_ms")]
    pub question_delay_ms: u64,

    /// Pause between the confirmation acknowledgement and the search
    /// hand-off, in ms.
    #[serde(default = "default_search_delay_ms")]
    pub search_delay_ms: u64,

    /// Rust log filter directive.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AssistantConfig {
    /// Pause before the clarifying question.
    pub fn question_delay(&self) -> Duration {
        Duration::from_millis(self.question_delay_ms)
    }

    /// Pause before the search hand-off.
    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    /// Validates assistant configuration.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.question_delay_ms > MAX_DELAY_MS {
            return Err(ConfigValidationError::DelayTooLong {
                field: "question_delay_ms",
                max_ms: MAX_DELAY_MS,
                actual_ms: self.question_delay_ms,
            });
        }
        if self.search_delay_ms > MAX_DELAY_MS {
            return Err(ConfigValidationError::DelayTooLong {
                field: "search_delay_ms",
                max_ms: MAX_DELAY_MS,
                actual_ms: self.search_delay_ms,
            });
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigValidationError::EmptyLogLevel);
        }
        Ok(())
    }

    /// Zero-delay settings for tests.
    pub fn immediate() -> Self {
        Self {
            question_delay_ms: 0,
            search_delay_ms: 0,
            log_level: default_log_level(),
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            question_delay_ms: default_question_delay_ms(),
            search_delay_ms: default_search_delay_ms(),
            log_level: default_log_level(),
        }
    }
}

fn default_question_delay_ms() -> u64 {
    1_500
}

fn default_search_delay_ms() -> u64 {
    1_000
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(AssistantConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_excessive_question_delay() {
        let config = AssistantConfig {
            question_delay_ms: MAX_DELAY_MS + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_blank_log_level() {
        let config = AssistantConfig {
            log_level: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn delays_convert_to_durations() {
        let config = AssistantConfig::default();
        assert_eq!(config.question_delay(), Duration::from_millis(1_500));
        assert_eq!(config.search_delay(), Duration::from_millis(1_000));
    }
}
