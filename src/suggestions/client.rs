use super::parse::{build_request_body, parse_generate_content_response};
use super::SuggestionError;
use crate::config::SuggestionSettings;
use crate::shared::EventLog;
use serde_json::Value;
use std::time::Duration;

pub const SUGGEST_API_BASE_ENV: &str = "ROLEPING_SUGGEST_API_BASE";
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Anything that can propose related role titles. Implementations never fail:
/// problems degrade to an empty list.
pub trait SuggestionSource: Send + Sync {
    fn suggest(&self, role: &str) -> Vec<String>;
}

#[derive(Debug, Clone)]
pub struct GenerativeSuggestionClient {
    api_base: String,
    model: String,
    api_key: Option<String>,
    temperature: f32,
    max_suggestions: usize,
    agent: ureq::Agent,
    log: EventLog,
}

impl GenerativeSuggestionClient {
    pub fn new(settings: &SuggestionSettings, api_key: Option<String>, log: EventLog) -> Self {
        let api_base = std::env::var(SUGGEST_API_BASE_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| settings.api_base.clone());
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build();
        Self {
            api_base,
            model: settings.model.clone(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            temperature: settings.temperature,
            max_suggestions: settings.max_suggestions,
            agent,
            log,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            urlencoding::encode(&self.model)
        )
    }

    pub fn fetch_suggestions(&self, role: &str) -> Result<Vec<String>, SuggestionError> {
        let role = role.trim();
        if role.is_empty() {
            return Ok(Vec::new());
        }
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SuggestionError::MissingCredential)?;
        let url = self.endpoint();

        // credential stays out of the URL
        let response = match self
            .agent
            .post(&url)
            .set("content-type", "application/json")
            .set(API_KEY_HEADER, api_key)
            .send_json(build_request_body(role, self.temperature))
        {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                return Err(SuggestionError::Status { url, status });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(SuggestionError::Request {
                    url,
                    reason: transport.kind().to_string(),
                });
            }
        };

        let payload = response
            .into_json::<Value>()
            .map_err(|err| SuggestionError::Decode(err.to_string()))?;
        parse_generate_content_response(&payload, self.max_suggestions)
    }
}

impl SuggestionSource for GenerativeSuggestionClient {
    fn suggest(&self, role: &str) -> Vec<String> {
        match self.fetch_suggestions(role) {
            Ok(suggestions) => suggestions,
            // reported once at startup
            Err(SuggestionError::MissingCredential) => Vec::new(),
            Err(err) => {
                self.log.warn("suggestions.fetch_failed", &err.to_string());
                Vec::new()
            }
        }
    }
}
