pub mod client;
pub mod dispatch;
pub mod parse;

pub use client::{
    GenerativeSuggestionClient, SuggestionSource, API_KEY_HEADER, SUGGEST_API_BASE_ENV,
};
pub use dispatch::{SuggestionDispatch, SuggestionReply, ThreadedSuggestionDispatcher};
pub use parse::{build_request_body, parse_generate_content_response, parse_suggestions};

#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion credential is not configured")]
    MissingCredential,
    #[error("suggestion request to {url} failed: {reason}")]
    Request { url: String, reason: String },
    #[error("suggestion endpoint {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to decode suggestion response: {0}")]
    Decode(String),
    #[error("suggestion response does not match schema: {0}")]
    Schema(String),
}
