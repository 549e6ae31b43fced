//! Unified error type exposed by **`promptly-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before bubbling them up. The variants are grouped by *what the caller can
//! do about it*: fix the configuration, fix the credential, check the network
//! or give up because the service refused.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PromptlyError>;

#[derive(Debug, Error)]
pub enum PromptlyError {
    /// Local configuration is incomplete, e.g. a missing API key. Raised
    /// before any network traffic happens.
    #[error("{0}")]
    Configuration(String),

    /// The selected backend does not recognise or support the requested
    /// `model`.
    #[error("provider `{provider}` does not support model `{model}`")]
    ModelNotSupported {
        provider: &'static str,
        model: String,
    },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Failure while serialising or deserialising JSON payloads sent to /
    /// received from the provider.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The provider rejected the credential.
    #[error("{message}")]
    Authentication { message: String },

    /// The request never produced an HTTP response (DNS, connect, TLS,
    /// timeout, ...).
    #[error("{0}")]
    Transport(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The provider answered, but with an error or with a reply that could
    /// not be understood.
    #[error("{message}")]
    Service {
        status: Option<u16>,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_render_their_message_only() {
        let err = PromptlyError::Authentication {
            message: "API key not valid".into(),
        };
        assert_eq!(err.to_string(), "API key not valid");

        let err = PromptlyError::Service {
            status: Some(503),
            message: "model is overloaded".into(),
        };
        assert_eq!(err.to_string(), "model is overloaded");
    }

    #[test]
    fn serde_errors_convert() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PromptlyError = source.into();
        assert!(matches!(err, PromptlyError::Serialization(_)));
    }
}
