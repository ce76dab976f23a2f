use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SUGGEST_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_SUGGEST_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BOT_URL: &str = "https://t.me/YourNotifierBot";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub suggestions: SuggestionSettings,
    pub verification: VerificationSettings,
    pub delivery: DeliverySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionSettings {
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
    pub max_suggestions: usize,
    pub debounce_ms: u64,
    pub min_query_chars: usize,
    pub timeout_ms: u64,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_SUGGEST_API_BASE.to_string(),
            model: DEFAULT_SUGGEST_MODEL.to_string(),
            temperature: 0.5,
            max_suggestions: 5,
            debounce_ms: 500,
            min_query_chars: 3,
            timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationSettings {
    pub delay_ms: u64,
}

impl Default for VerificationSettings {
    fn default() -> Self {
        Self { delay_ms: 1500 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliverySettings {
    pub bot_url: String,
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            bot_url: DEFAULT_BOT_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suggestions.model.trim().is_empty() {
            return Err(ConfigError::Settings(
                "`suggestions.model` must be non-empty".to_string(),
            ));
        }
        if self.suggestions.api_base.trim().is_empty() {
            return Err(ConfigError::Settings(
                "`suggestions.api_base` must be non-empty".to_string(),
            ));
        }
        if self.suggestions.max_suggestions == 0 {
            return Err(ConfigError::Settings(
                "`suggestions.max_suggestions` must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.suggestions.temperature) {
            return Err(ConfigError::Settings(format!(
                "`suggestions.temperature` must be within 0.0..=2.0, got {}",
                self.suggestions.temperature
            )));
        }
        if self.delivery.bot_url.trim().is_empty() {
            return Err(ConfigError::Settings(
                "`delivery.bot_url` must be non-empty".to_string(),
            ));
        }
        Ok(())
    }
}
