pub mod error;
pub mod load;
pub mod paths;
pub mod settings;

pub use error::ConfigError;
pub use load::{
    load_global_settings, load_settings_from, suggestion_api_key, API_KEY_ENV,
    FALLBACK_API_KEY_ENV,
};
pub use paths::{default_global_config_path, default_state_root};
pub use settings::{
    DeliverySettings, Settings, SuggestionSettings, VerificationSettings, DEFAULT_BOT_URL,
    DEFAULT_SUGGEST_API_BASE, DEFAULT_SUGGEST_MODEL,
};
