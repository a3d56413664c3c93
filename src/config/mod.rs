//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `LEDGER_COPILOT` prefix
//! and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use ledger_copilot::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init();
//! ```

mod ai;
mod drafting;
mod error;
mod logging;

pub use ai::AiConfig;
pub use drafting::DraftingConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

use crate::application::OrchestratorSettings;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// rule-based engine with no directory and no model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Optional model-assisted classification (Anthropic)
    #[serde(default)]
    pub ai: AiConfig,

    /// Input limits and tenant directory
    #[serde(default)]
    pub drafting: DraftingConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LEDGER_COPILOT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `LEDGER_COPILOT__AI__ENABLED=true` -> `ai.enabled = true`
    /// - `LEDGER_COPILOT__DRAFTING__HINT_LIMIT=10` -> `drafting.hint_limit = 10`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LEDGER_COPILOT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.drafting.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Orchestrator tunables derived from this configuration
    pub fn orchestrator_settings(&self) -> OrchestratorSettings {
        OrchestratorSettings {
            max_input_chars: self.drafting.max_input_chars,
            hint_limit: self.drafting.hint_limit,
            max_tokens: self.ai.max_tokens,
        }
    }
}
