//! Drafting engine configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::drafting::DEFAULT_MAX_INPUT_CHARS;

/// Upper bound accepted for `max_input_chars`.
const MAX_INPUT_CHARS_LIMIT: usize = 20_000;

#[derive(Debug, Clone, Deserialize)]
pub struct DraftingConfig {
    /// Longer messages are truncated before matching
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Per-category cap on tenant names shown in prompts and questions
    #[serde(default = "default_hint_limit")]
    pub hint_limit: usize,

    /// YAML tenant directory; no directory lookups when unset
    pub directory_path: Option<PathBuf>,
}

impl DraftingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_input_chars == 0 || self.max_input_chars > MAX_INPUT_CHARS_LIMIT {
            return Err(ValidationError::InvalidMaxInputChars);
        }
        if let Some(path) = &self.directory_path {
            if path.as_os_str().is_empty() {
                return Err(ValidationError::MissingRequired("DRAFTING__DIRECTORY_PATH"));
            }
        }
        Ok(())
    }
}

impl Default for DraftingConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
            hint_limit: default_hint_limit(),
            directory_path: None,
        }
    }
}

fn default_max_input_chars() -> usize {
    DEFAULT_MAX_INPUT_CHARS
}

fn default_hint_limit() -> usize {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DraftingConfig::default();
        assert_eq!(config.max_input_chars, 2_000);
        assert_eq!(config.hint_limit, 20);
        assert!(config.directory_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_input_limit() {
        let config = DraftingConfig {
            max_input_chars: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidMaxInputChars)
        ));
    }

    #[test]
    fn test_rejects_empty_directory_path() {
        let config = DraftingConfig {
            directory_path: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
