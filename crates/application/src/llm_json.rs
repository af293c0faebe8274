//! Tolerant JSON extraction from generation responses
//!
//! Models are instructed to reply with bare JSON but routinely wrap it in
//! Markdown code fences or surround it with commentary. Parsing therefore
//! strips any fence first, then takes the substring between the first
//! opening and the last closing bracket before decoding.

use serde::de::DeserializeOwned;

use crate::error::ApplicationError;

/// Remove a leading ```json / ``` fence and a trailing ``` fence
fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest.trim_start();
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest.trim_start();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }
    text
}

/// Extract the span between the first `open` and the last `close`
fn extract_span(text: &str, open: char, close: char) -> Result<&str, ApplicationError> {
    let start = text.find(open);
    let end = text.rfind(close);
    match (start, end) {
        (Some(s), Some(e)) if s < e => Ok(&text[s..=e]),
        _ => Err(ApplicationError::Parse(format!(
            "no valid {open}...{close} span found in response"
        ))),
    }
}

/// Parse a JSON object out of a raw generation response
pub fn parse_llm_object<T: DeserializeOwned>(raw: &str) -> Result<T, ApplicationError> {
    let span = extract_span(strip_fences(raw), '{', '}')?;
    serde_json::from_str(span).map_err(|e| ApplicationError::Parse(format!("JSON decode: {e}")))
}

/// Parse a JSON array out of a raw generation response
pub fn parse_llm_array<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>, ApplicationError> {
    let span = extract_span(strip_fences(raw), '[', ']')?;
    serde_json::from_str(span).map_err(|e| ApplicationError::Parse(format!("JSON decode: {e}")))
}
