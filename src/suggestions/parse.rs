use super::SuggestionError;
use serde_json::{json, Value};

pub const SUGGESTION_COUNT_HINT: usize = 5;

pub fn suggestion_prompt(role: &str) -> String {
    format!(
        "Given the job role \"{role}\", suggest {SUGGESTION_COUNT_HINT} similar or related job titles."
    )
}

/// `generateContent` request asking for `{ "suggestions": [string] }` as JSON.
pub fn build_request_body(role: &str, temperature: f32) -> Value {
    json!({
        "contents": [
            { "role": "user", "parts": [ { "text": suggestion_prompt(role) } ] }
        ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "suggestions": {
                        "type": "ARRAY",
                        "items": {
                            "type": "STRING",
                            "description": "A suggested job title."
                        }
                    }
                }
            },
            "temperature": temperature,
        }
    })
}

fn candidate_text(response: &Value) -> Option<String> {
    let parts = response
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn parse_generate_content_response(
    response: &Value,
    max_suggestions: usize,
) -> Result<Vec<String>, SuggestionError> {
    let text = candidate_text(response)
        .ok_or_else(|| SuggestionError::Schema("response has no candidate text".to_string()))?;
    parse_suggestions(&text, max_suggestions)
}

pub fn parse_suggestions(
    json_text: &str,
    max_suggestions: usize,
) -> Result<Vec<String>, SuggestionError> {
    let value: Value = serde_json::from_str(json_text.trim())
        .map_err(|err| SuggestionError::Decode(err.to_string()))?;
    let entries = value
        .get("suggestions")
        .and_then(Value::as_array)
        .ok_or_else(|| SuggestionError::Schema("`suggestions` must be an array".to_string()))?;

    let mut suggestions = Vec::new();
    for entry in entries {
        let Some(title) = entry.as_str() else {
            return Err(SuggestionError::Schema(format!(
                "`suggestions` entries must be strings, got {entry}"
            )));
        };
        let title = title.trim();
        if title.is_empty() {
            continue;
        }
        suggestions.push(title.to_string());
        if suggestions.len() == max_suggestions {
            break;
        }
    }
    Ok(suggestions)
}
