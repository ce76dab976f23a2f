use super::{default_global_config_path, ConfigError, Settings};
use std::path::Path;

pub const API_KEY_ENV: &str = "ROLEPING_API_KEY";
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

pub fn load_global_settings() -> Result<Settings, ConfigError> {
    let path = default_global_config_path()?;
    load_settings_from(&path)
}

/// A missing file is not an error: every field has a default.
pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let settings = Settings::from_path(path)?;
    settings.validate()?;
    Ok(settings)
}

pub fn suggestion_api_key() -> Option<String> {
    [API_KEY_ENV, FALLBACK_API_KEY_ENV]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
