//! Model identifiers used throughout the **promptly** workspace.
//!
//! Callers pick an enum variant and let the backend translate it into its own
//! naming scheme, so literal strings such as `"gemini-2.0-flash-001"` only
//! live in the provider crate.
//!
//! # Adding more models
//!
//! 1. Add the variant to [`GeminiModel`].
//! 2. Update `promptly_gemini::model_map::map_model`.
//!
//! ```rust
//! use promptly_core::model::{GeminiModel, Model};
//! assert_eq!(Model::from(GeminiModel::Gemini2_0Flash001),
//!            Model::Gemini(GeminiModel::Gemini2_0Flash001));
//! ```

/// Universal identifier for an LLM model.
///
/// * `Gemini` – models officially supported by the Gemini backend.
/// * `Custom` – any model name not covered by a dedicated enum (previews,
///   tuned models, ...). Passed to the backend untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini(GeminiModel),
    Custom(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeminiModel {
    Gemini2_0Flash001,
    Gemini2_0Flash,
    Gemini2_0FlashLite,
    Gemini2_5Flash,
    Gemini2_5Pro,
}

impl From<GeminiModel> for Model {
    fn from(val: GeminiModel) -> Self {
        Model::Gemini(val)
    }
}
