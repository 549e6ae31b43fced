//! Generic message and role types used by the *promptly-core* crate.
//!
//! They mirror the concepts exposed by most provider APIs ("system", "user",
//! "assistant"). Backends convert them into their own wire structs via
//! `From`/`Into`, and tests can build them without a transport layer.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single chat message that is independent of any specific provider.
///
/// * `content` – the raw UTF-8 text, `None` when a reply carried no text.
/// * `role` – see [`GenericRole`] for permitted values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub content: Option<String>,
    pub role: GenericRole,
}

impl GenericMessage {
    /// Convenience constructor mirroring the field order used by common HTTP
    /// APIs (`role`, then `content`).
    ///
    /// ```rust
    /// use promptly_core::generic::{GenericMessage, GenericRole};
    ///
    /// let ask = GenericMessage::new("Why is the sky blue?".into(), GenericRole::User);
    /// assert_eq!(ask.text(), "Why is the sky blue?");
    /// ```
    pub fn new(message: String, role: GenericRole) -> Self {
        Self {
            content: Some(message),
            role,
        }
    }

    /// Shorthand for a message sent by the human user.
    pub fn user(message: impl Into<String>) -> Self {
        Self::new(message.into(), GenericRole::User)
    }

    /// The message text, or an empty string when there is none.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

/// High-level chat roles recognised by most LLM providers.
///
/// The `Display` implementation renders the canonical lowercase name.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    /// "System" messages define global behaviour and style guidelines.
    System,
    /// Messages produced by the assistant / model.
    Assistant,
    /// Messages originating from the human user.
    User,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::Assistant => write!(f, "assistant"),
            GenericRole::User => write!(f, "user"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenericChatCompletionResponse<T> {
    pub content: T,
    pub usage: Option<GenericUsageReport>,
}

/// Token accounting as reported by the provider. The values are passed on
/// verbatim, nothing here recomputes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}
