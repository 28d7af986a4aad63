//! JSON bodies exchanged with the chat endpoint.
//!
//! Request: `{"message": "..."}`. Success reply: `{"response": "..."}`.
//! The backend answers failures with `{"error": "..."}` and a non-2xx status.

use serde::{Deserialize, Serialize};
use crate::{ChatError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequestBody {
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponseBody {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Extract the reply text from a successful (2xx) response body.
pub fn parse_chat_response(body: &str) -> Result<String> {
    let parsed: ChatResponseBody = serde_json::from_str(body)
        .map_err(|e| ChatError::Malformed(e.to_string()))?;

    match parsed.response {
        Some(text) => Ok(text),
        None => Err(ChatError::Malformed(match parsed.error {
            Some(err) => format!("missing `response` field (error: {})", err),
            None => "missing `response` field".to_string(),
        })),
    }
}

/// Build the error for a non-2xx response, preferring the backend's own
/// `error` field over the raw body.
pub fn status_error(status: u16, body: &str) -> ChatError {
    let detail = serde_json::from_str::<ChatResponseBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| body.trim().to_string());
    ChatError::Status { status, body: detail }
}
