use promptly_core::error::PromptlyError;
use reqwest::StatusCode;

use crate::api_v1::ErrorEnvelope;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("API key is not a valid header value")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Gemini returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Gemini format error: {0}")]
    Format(String),
}

/// Reason Google attaches to a 400 when the key itself is wrong.
const API_KEY_INVALID: &str = "API_KEY_INVALID";

impl From<GeminiError> for PromptlyError {
    fn from(value: GeminiError) -> Self {
        match value {
            GeminiError::Http(err) => PromptlyError::Transport(Box::new(err)),
            GeminiError::InvalidApiKey(_) => {
                PromptlyError::Configuration("API key contains invalid characters".into())
            }
            GeminiError::Api { status, body } => classify_api_error(status, &body),
            GeminiError::Serde(err) => PromptlyError::Service {
                status: None,
                message: format!("malformed response: {err}"),
            },
            GeminiError::Format(message) => PromptlyError::Service {
                status: None,
                message,
            },
        }
    }
}

fn classify_api_error(status: StatusCode, body: &str) -> PromptlyError {
    let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();

    let message = match &envelope {
        Some(envelope) if !envelope.error.message.is_empty() => envelope.error.message.clone(),
        _ if !body.trim().is_empty() => body.trim().to_owned(),
        _ => status
            .canonical_reason()
            .unwrap_or("empty error body")
            .to_owned(),
    };

    let key_rejected = envelope
        .as_ref()
        .is_some_and(|envelope| envelope.error.has_reason(API_KEY_INVALID));

    if key_rejected || status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return PromptlyError::Authentication { message };
    }

    PromptlyError::Service {
        status: Some(status.as_u16()),
        message: format!("{status}: {message}"),
    }
}
