use reqwest::{
    Client as HttpClient,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::{fmt, time::Duration};

use crate::{
    api_v1::{GenerateContentRequest, GenerateContentResponse},
    error::GeminiError,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Minimal HTTP client for Gemini's *models/{model}:generateContent* endpoint.
///
/// * Non-streaming only (one request ▶ one response).
/// * Accepts and returns the `api_v1` request / response structs defined
///   in this crate.
/// * Shares a single `reqwest::Client`, so cloning `GeminiClient` is cheap.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"<redacted>")
            .field("base", &self.base)
            .finish()
    }
}

impl GeminiClient {
    /// Convenience constructor building a default `reqwest` client with a
    /// 30 s timeout and Rustls TLS.
    pub fn new(api_key: impl Into<String>) -> Result<Self, GeminiError> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT, None)
    }

    pub fn with_timeout(
        api_key: impl Into<String>,
        timeout: Duration,
        base_url: Option<String>,
    ) -> Result<Self, GeminiError> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self::with_http(api_key, http, base_url))
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Self {
            api_key: api_key.into(),
            http,
            base: base.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Perform a **non-streaming** `generateContent` call against `model`.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key = HeaderValue::from_str(&self.api_key)?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);

        let url = format!("{}/models/{}:generateContent", self.base, model);
        tracing::debug!(%url, "sending generateContent request");

        let resp = self
            .http
            .post(&url)
            .headers(headers)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        tracing::debug!(%status, "generateContent responded");

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%status, "generateContent failed");
            return Err(GeminiError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;

        if let Some(usage) = &parsed.usage_metadata {
            tracing::debug!(
                prompt_tokens = usage.prompt_token_count,
                candidates_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "token usage"
            );
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = GeminiClient::with_http(
            "key",
            HttpClient::new(),
            Some("http://localhost:1234/v1beta/".into()),
        );
        assert_eq!(client.base_url(), "http://localhost:1234/v1beta");
    }

    #[test]
    fn debug_output_hides_the_key() {
        let client = GeminiClient::with_http("super-secret", HttpClient::new(), None);
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains(DEFAULT_BASE_URL));
    }
}
