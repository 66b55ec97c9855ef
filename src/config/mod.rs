//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are loaded with the
//! `SHOWROOM_VOICE_` prefix; nested values use `__` as separator, e.g.
//! `SHOWROOM_VOICE__ASSISTANT__QUESTION_DELAY_MS=2000`.

mod assistant;
mod error;

pub use assistant::AssistantConfig;
pub use error::{ConfigError, ConfigValidationError};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Voice assistant timing and logging settings.
    #[serde(default)]
    pub assistant: AssistantConfig,
}

impl AppConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn load() -> Result<Self, ConfigError> {
        let raw = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("SHOWROOM_VOICE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;
        let loaded: AppConfig = raw.try_deserialize()?;
        Ok(loaded)
    }

    /// Validates all sections.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.assistant.validate()
    }
}
