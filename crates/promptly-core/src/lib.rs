//! Provider-agnostic building blocks for **promptly**.
//!
//! | Module       | What it provides                                                   |
//! |--------------|--------------------------------------------------------------------|
//! | [`generic`]  | Messages, roles, usage reports and the response envelope           |
//! | [`model`]    | Model identifiers the backends map onto their own naming scheme    |
//! | [`provider`] | The [`provider::ChatCompletionProvider`] trait and its parameters  |
//! | [`error`]    | [`PromptlyError`] with the failure categories callers branch on    |
//!
//! Backend crates (e.g. `promptly-gemini`) implement the provider trait, the
//! CLI only ever talks to the trait.
pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;

pub use client::PromptlyClient;
pub use error::{PromptlyError, Result};
