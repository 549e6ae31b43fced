//! Process configuration: the optional `.env` file and the settings read from
//! the environment.
use std::{path::PathBuf, time::Duration};

use promptly_core::error::{PromptlyError, Result};

/// Request timeout in whole seconds, overriding the backend default.
pub const TIMEOUT_ENV: &str = "PROMPTLY_TIMEOUT_SECS";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// What happened when looking for a `.env` file.
#[derive(Debug)]
pub enum DotenvOutcome {
    Loaded(PathBuf),
    NotFound,
    Invalid(String),
}

/// Populate the process environment from `.env` in the working directory or
/// one of its parents. Variables already set are left alone.
pub fn load_dotenv() -> DotenvOutcome {
    match dotenvy::dotenv() {
        Ok(path) => DotenvOutcome::Loaded(path),
        Err(err) if err.not_found() => DotenvOutcome::NotFound,
        Err(err) => DotenvOutcome::Invalid(err.to_string()),
    }
}

/// Parse [`TIMEOUT_ENV`] through `lookup`. Unset means "use the default".
pub fn timeout_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Option<Duration>> {
    let Some(raw) = lookup(TIMEOUT_ENV) else {
        return Ok(None);
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
        _ => Err(PromptlyError::Configuration(format!(
            "`{TIMEOUT_ENV}` must be a positive number of seconds, got `{raw}`"
        ))),
    }
}

/// Build the Gemini backend from the process environment.
#[cfg(feature = "gemini")]
pub fn gemini_backend() -> Result<promptly_gemini::GeminiAdapter> {
    gemini_backend_from(|name| std::env::var(name).ok())
}

/// Build the Gemini backend from the variables `lookup` returns.
#[cfg(feature = "gemini")]
pub fn gemini_backend_from(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<promptly_gemini::GeminiAdapter> {
    let mut builder = promptly_gemini::GeminiAdapterBuilder::from_lookup(&lookup);
    if let Some(timeout) = timeout_from(&lookup)? {
        builder = builder.with_timeout(timeout);
    }
    builder.build()
}
