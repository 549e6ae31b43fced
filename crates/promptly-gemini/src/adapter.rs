use std::{env, sync::Arc, time::Duration};

use promptly_core::error::{PromptlyError, Result};
use reqwest::Url;

use crate::client::{DEFAULT_TIMEOUT, GeminiClient};

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Optional override of the API base URL (proxies, local fakes).
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";

/// Thin wrapper that wires the HTTP client [`GeminiClient`] into a value that
/// implements [`promptly_core::provider::ChatCompletionProvider`].
///
/// It stores nothing but a shareable, connection-pooled client; all
/// user-facing functionality sits on the provider trait.
#[derive(Debug)]
pub struct GeminiAdapter {
    pub(crate) client: Arc<GeminiClient>,
}

impl GeminiAdapter {
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// Builder for [`GeminiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use promptly_gemini::GeminiAdapterBuilder;
///
/// let backend = GeminiAdapterBuilder::new_from_env()
///     .build()
///     .expect("GEMINI_API_KEY must be set");
/// ```
#[derive(Default)]
pub struct GeminiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl GeminiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `GEMINI_API_KEY` and `GEMINI_BASE_URL` from the process
    /// environment.
    ///
    /// Never fails. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Self::new_from_env`] with a caller supplied lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: lookup(API_KEY_ENV),
            base_url: lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()),
            timeout: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`PromptlyError::Configuration`] – if the API key is missing or blank,
    ///   the base URL does not parse, or the HTTP client cannot be set up.
    pub fn build(self) -> Result<GeminiAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                PromptlyError::Configuration(format!("missing env variable: `{API_KEY_ENV}`"))
            })?;

        if let Some(base_url) = &self.base_url {
            Url::parse(base_url).map_err(|err| {
                PromptlyError::Configuration(format!(
                    "invalid `{BASE_URL_ENV}` value `{base_url}`: {err}"
                ))
            })?;
        }

        let client = match (self.timeout, self.base_url) {
            (None, None) => GeminiClient::new(api_key.trim()),
            (timeout, base_url) => GeminiClient::with_timeout(
                api_key.trim(),
                timeout.unwrap_or(DEFAULT_TIMEOUT),
                base_url,
            ),
        }
        .map_err(|err| PromptlyError::Configuration(format!("cannot set up HTTP client: {err}")))?;

        Ok(GeminiAdapter {
            client: Arc::new(client),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::DEFAULT_BASE_URL;

    #[test]
    fn missing_key_is_a_configuration_error() {
        let err = GeminiAdapterBuilder::from_lookup(|_| None).build().unwrap_err();
        assert!(matches!(err, PromptlyError::Configuration(_)));
        assert_eq!(err.to_string(), "missing env variable: `GEMINI_API_KEY`");
    }

    #[test]
    fn blank_key_is_rejected() {
        let err = GeminiAdapterBuilder::new().with_api_key("   ").build().unwrap_err();
        assert!(matches!(err, PromptlyError::Configuration(_)));
    }

    #[test]
    fn lookup_supplies_key_and_base_url() {
        let adapter = GeminiAdapterBuilder::from_lookup(|name| match name {
            API_KEY_ENV => Some("abc".into()),
            BASE_URL_ENV => Some("http://127.0.0.1:9/v1beta".into()),
            _ => None,
        })
        .build()
        .unwrap();

        assert_eq!(adapter.base_url(), "http://127.0.0.1:9/v1beta");
    }

    #[test]
    fn blank_base_url_falls_back_to_default() {
        let adapter = GeminiAdapterBuilder::from_lookup(|name| match name {
            API_KEY_ENV => Some("abc".into()),
            _ => Some(String::new()),
        })
        .build()
        .unwrap();

        assert_eq!(adapter.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn malformed_base_url_is_a_configuration_error() {
        let err = GeminiAdapterBuilder::from_lookup(|name| match name {
            API_KEY_ENV => Some("abc".into()),
            BASE_URL_ENV => Some("not a url".into()),
            _ => None,
        })
        .build()
        .unwrap_err();

        assert!(matches!(err, PromptlyError::Configuration(_)));
        assert!(err.to_string().starts_with("invalid `GEMINI_BASE_URL` value `not a url`"));
    }

    #[test]
    fn key_only_builder_uses_defaults() {
        let adapter = GeminiAdapterBuilder::new().with_api_key("abc").build().unwrap();
        assert_eq!(adapter.base_url(), DEFAULT_BASE_URL);
    }
}
