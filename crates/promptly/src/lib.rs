//! # `promptly` – send one prompt, print one answer
//!
//! The crate glues the building blocks of the workspace into a command-line
//! runner:
//!
//! | Crate / module           | What it provides                                                   |
//! |--------------------------|--------------------------------------------------------------------|
//! | **`promptly-core`**      | Provider trait, generic messages, usage reports, error categories   |
//! | **`promptly-gemini`**    | HTTP backend for Gemini's `generateContent` *(feature `gemini`)*    |
//! | [`cli`]                  | Argument classification, usage text, report rendering              |
//! | [`runner`]               | [`execute`]: argv in, one request out, report or [`Failure`] back   |
//! | [`config`]               | `.env` loading and backend construction from the environment       |
//!
//! The runner never builds a backend itself. It receives a `connect` closure
//! so tests can hand in a fake provider and the binary can hand in Gemini:
//!
//! ```rust,no_run
//! use promptly::{PromptlyClient, config, execute};
//!
//! # async fn demo() {
//! let mut stdout = std::io::stdout();
//! let outcome = execute(
//!     ["Why", "is", "the", "sky", "blue?", "--verbose"],
//!     || config::gemini_backend().map(PromptlyClient::new),
//!     &mut stdout,
//! )
//! .await;
//! # }
//! ```
pub mod cli;
pub mod config;
pub mod runner;

pub use promptly_core::*;

#[cfg(feature = "gemini")]
pub use promptly_gemini as gemini;

pub use runner::{Failure, MODEL, execute};
